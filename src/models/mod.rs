pub mod clinic;
pub mod disease;
pub mod enums;
pub mod medication;
pub mod patient;
pub mod plan;

pub use clinic::Clinic;
pub use disease::{Disease, MedicationCombination};
pub use medication::{Medication, Prescription};
pub use patient::Patient;
pub use plan::{AgeBreakdown, DiseaseLikelihood, Regimen, TreatmentPlan};
