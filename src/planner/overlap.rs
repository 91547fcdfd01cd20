use std::collections::HashSet;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::enums::SymptomCounting;

use super::types::PlannerError;

/// Decimal places kept on every overlap ratio.
const RATIO_SCALE: u32 = 2;

/// Fraction of `target_symptoms` present in `patient_symptoms`, rounded
/// half-up to two decimal places.
///
/// Matching is exact and case-sensitive. With [`SymptomCounting::Distinct`]
/// both sides are treated as sets. With [`SymptomCounting::PerOccurrence`]
/// every patient symptom occurrence found in the target counts, the
/// denominator is the target list length, and the result is capped at 1.
pub fn overlap_ratio(
    patient_symptoms: &[String],
    target_symptoms: &[String],
    counting: SymptomCounting,
) -> Result<Decimal, PlannerError> {
    if target_symptoms.is_empty() {
        return Err(PlannerError::InvalidInput(
            "cannot score against an empty symptom list".into(),
        ));
    }

    let target: HashSet<&str> = target_symptoms.iter().map(String::as_str).collect();

    let (matched, total) = match counting {
        SymptomCounting::Distinct => {
            let matched = patient_symptoms
                .iter()
                .map(String::as_str)
                .filter(|s| target.contains(s))
                .collect::<HashSet<_>>()
                .len();
            (matched, target.len())
        }
        SymptomCounting::PerOccurrence => {
            let matched = patient_symptoms
                .iter()
                .filter(|s| target.contains(s.as_str()))
                .count();
            (matched, target_symptoms.len())
        }
    };

    let ratio = (Decimal::from(matched) / Decimal::from(total)).min(Decimal::ONE);
    Ok(ratio.round_dp_with_strategy(RATIO_SCALE, RoundingStrategy::MidpointAwayFromZero))
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn symptom() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["fever", "rash", "cough", "chills", "nausea", "fatigue"])
            .prop_map(String::from)
    }

    proptest! {
        /// Ratios never leave [0, 1] in either counting mode.
        #[test]
        fn ratio_within_unit_interval(
            patient in prop::collection::vec(symptom(), 0..12),
            target in prop::collection::vec(symptom(), 1..8),
            per_occurrence in any::<bool>(),
        ) {
            let counting = if per_occurrence {
                SymptomCounting::PerOccurrence
            } else {
                SymptomCounting::Distinct
            };
            let ratio = overlap_ratio(&patient, &target, counting).unwrap();
            prop_assert!(ratio >= Decimal::ZERO && ratio <= Decimal::ONE);
            prop_assert!(ratio.scale() <= 2);
        }
    }
}
