//! Treatment planning: from a patient's profile to clinics, likely diseases
//! and a cost-minimized medication regimen.
//!
//! Leaf to root:
//! 1. `age`: calendar age against the configured reference date
//! 2. `overlap`: symptom-overlap ratio shared by clinics and likelihoods
//! 3. `clinics`: age range plus likely-disease eligibility
//! 4. `likelihood`: overlap ratio for every catalog disease
//! 5. `optimizer`: cheapest allergen-free medication combination
//! 6. `engine`: assembles the treatment plan
//!
//! All of it reads one immutable [`Catalog`] snapshot; nothing here mutates
//! shared state.

pub mod age;
pub mod catalog;
pub mod clinics;
pub mod engine;
pub mod likelihood;
pub mod optimizer;
pub mod overlap;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::Catalog;
pub use engine::DefaultTreatmentPlanner;
pub use types::{PlannerError, TreatmentPlanner};
