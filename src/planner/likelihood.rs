use rust_decimal::Decimal;

use crate::models::enums::SymptomCounting;
use crate::models::{DiseaseLikelihood, Patient};

use super::catalog::Catalog;
use super::overlap::overlap_ratio;

/// Score every catalog disease against the patient's symptoms, in catalog order.
///
/// A disease without symptoms cannot be scored and is left out with a warning.
pub fn disease_likelihoods(
    patient: &Patient,
    catalog: &Catalog,
    counting: SymptomCounting,
) -> Vec<DiseaseLikelihood> {
    catalog
        .diseases()
        .iter()
        .filter_map(|disease| {
            match overlap_ratio(&patient.symptoms, &disease.symptoms, counting) {
                Ok(likelihood) => Some(DiseaseLikelihood {
                    disease: disease.name.clone(),
                    likelihood,
                }),
                Err(e) => {
                    tracing::warn!(disease = %disease.name, error = %e, "Disease not scored");
                    None
                }
            }
        })
        .collect()
}

/// Keep the likelihoods at or above `threshold`, preserving order.
pub fn qualifying(
    likelihoods: Vec<DiseaseLikelihood>,
    threshold: Decimal,
) -> Vec<DiseaseLikelihood> {
    likelihoods
        .into_iter()
        .filter(|l| l.likelihood >= threshold)
        .collect()
}
