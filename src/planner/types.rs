use thiserror::Error;

use crate::models::enums::CatalogKind;
use crate::models::{
    AgeBreakdown, Clinic, Disease, DiseaseLikelihood, Patient, Regimen, TreatmentPlan,
};

// ---------------------------------------------------------------------------
// PlannerError
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Disease {disease} references unknown medication {medication}")]
    UnknownMedication { disease: String, medication: String },

    #[error("Clinic {clinic} references unknown disease {disease}")]
    UnknownDisease { clinic: String, disease: String },

    #[error("Duplicate {} name in catalog: {name}", .kind.as_str())]
    DuplicateEntry { kind: CatalogKind, name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// TreatmentPlanner trait
// ---------------------------------------------------------------------------

/// Queries answered against one immutable catalog snapshot.
///
/// Every method is a pure function of the patient and the snapshot: calling
/// one twice with the same patient returns the same result.
pub trait TreatmentPlanner {
    /// Whole calendar years between birth and the reference date.
    fn age_in_years(&self, patient: &Patient) -> Result<u32, PlannerError>;

    /// Whole calendar months between birth and the reference date.
    fn age_in_months(&self, patient: &Patient) -> Result<u32, PlannerError>;

    /// Years plus remaining months.
    fn age_breakdown(&self, patient: &Patient) -> Result<AgeBreakdown, PlannerError>;

    /// Clinics admitting the patient's age and treating a likely disease.
    fn eligible_clinics(&self, patient: &Patient) -> Result<Vec<Clinic>, PlannerError>;

    /// Symptom-overlap likelihood of every scorable catalog disease.
    fn disease_likelihoods(&self, patient: &Patient) -> Vec<DiseaseLikelihood>;

    /// Cheapest allergen-free medication combination for one disease.
    fn best_medication_combination(
        &self,
        patient: &Patient,
        disease: &Disease,
    ) -> Result<Regimen, PlannerError>;

    /// Clinics, age and summed medication dosages for all likely diseases.
    fn treatment_plan(&self, patient: &Patient) -> Result<TreatmentPlan, PlannerError>;
}
