use rust_decimal::Decimal;

use crate::models::enums::SymptomCounting;
use crate::models::{Clinic, Patient};

use super::catalog::Catalog;
use super::overlap::overlap_ratio;

/// Clinics whose age range admits the patient and which treat at least one
/// disease the patient's symptoms match at or above `threshold`.
///
/// Catalog order is preserved and a clinic appears at most once: the first
/// qualifying disease settles it. Disease names missing from the catalog
/// are ignored, and diseases without symptoms never qualify.
pub fn eligible_clinics(
    patient: &Patient,
    age_in_months: u32,
    catalog: &Catalog,
    threshold: Decimal,
    counting: SymptomCounting,
) -> Vec<Clinic> {
    catalog
        .clinics()
        .iter()
        .filter(|clinic| clinic.admits_age(age_in_months))
        .filter(|clinic| treats_likely_disease(patient, clinic, catalog, threshold, counting))
        .cloned()
        .collect()
}

fn treats_likely_disease(
    patient: &Patient,
    clinic: &Clinic,
    catalog: &Catalog,
    threshold: Decimal,
    counting: SymptomCounting,
) -> bool {
    clinic.diseases.iter().any(|name| {
        let Some(disease) = catalog.disease(name) else {
            tracing::debug!(clinic = %clinic.name, disease = %name, "Unknown disease ignored");
            return false;
        };
        match overlap_ratio(&patient.symptoms, &disease.symptoms, counting) {
            Ok(ratio) => ratio >= threshold,
            Err(e) => {
                tracing::warn!(
                    clinic = %clinic.name,
                    disease = %disease.name,
                    error = %e,
                    "Disease not scored"
                );
                false
            }
        }
    })
}
