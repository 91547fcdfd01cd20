use rust_decimal::Decimal;

use crate::models::enums::UnknownMedicationPolicy;
use crate::models::{Disease, MedicationCombination, Patient, Prescription, Regimen};

use super::catalog::Catalog;
use super::types::PlannerError;

/// Cheapest medication combination for `disease` that avoids every allergen
/// of the patient.
///
/// A combination is rejected outright if any of its medication names is in
/// the patient's allergy set. Each surviving combination is priced at
/// `dosage_per_kg * weight * cost_per_mg` summed over its medications, and
/// the strictly cheapest one wins; on a tie the earlier combination is kept.
/// Empty combinations are never candidates. Returns an empty regimen when no
/// combination survives.
///
/// A combination naming a medication missing from the catalog is dropped
/// under [`UnknownMedicationPolicy::Skip`] and fails the whole call with
/// [`PlannerError::UnknownMedication`] under [`UnknownMedicationPolicy::Fail`].
/// A combination whose dosage or cost overflows is always dropped.
pub fn best_combination(
    patient: &Patient,
    disease: &Disease,
    catalog: &Catalog,
    policy: UnknownMedicationPolicy,
) -> Result<Regimen, PlannerError> {
    let mut best: Option<(Decimal, Regimen)> = None;

    for (index, combination) in disease.medication_combinations.iter().enumerate() {
        if combination.is_empty() {
            tracing::debug!(disease = %disease.name, index, "Empty combination skipped");
            continue;
        }

        if let Some(allergen) = combination
            .medication_names()
            .find(|name| patient.is_allergic_to(name))
        {
            tracing::debug!(
                disease = %disease.name,
                index,
                allergen,
                "Combination rejected: patient allergy"
            );
            continue;
        }

        let (regimen, cost) = match price_combination(patient, disease, combination, catalog) {
            Ok(priced) => priced,
            Err(e @ PlannerError::UnknownMedication { .. })
                if policy == UnknownMedicationPolicy::Fail =>
            {
                return Err(e);
            }
            Err(e) => {
                tracing::warn!(disease = %disease.name, index, error = %e, "Combination skipped");
                continue;
            }
        };

        match &best {
            Some((best_cost, _)) if cost >= *best_cost => {
                tracing::debug!(disease = %disease.name, index, %cost, "Combination not cheaper");
            }
            _ => best = Some((cost, regimen)),
        }
    }

    Ok(best.map(|(_, regimen)| regimen).unwrap_or_default())
}

/// Dosages in mg for one combination at the patient's weight, with the
/// combination's total cost.
fn price_combination(
    patient: &Patient,
    disease: &Disease,
    combination: &MedicationCombination,
    catalog: &Catalog,
) -> Result<(Regimen, Decimal), PlannerError> {
    let overflow = || {
        PlannerError::InvalidInput(format!(
            "dosage cost for {} at {}kg exceeds the decimal range",
            disease.name, patient.weight_kg
        ))
    };

    let prescriptions = combination
        .dosages_per_kg
        .iter()
        .map(|(name, dosage_per_kg)| {
            let medication =
                catalog
                    .medication(name)
                    .ok_or_else(|| PlannerError::UnknownMedication {
                        disease: disease.name.clone(),
                        medication: name.clone(),
                    })?;
            let dosage_mg = dosage_per_kg
                .checked_mul(patient.weight_kg)
                .ok_or_else(overflow)?;
            Ok(Prescription {
                medication: medication.clone(),
                dosage_mg,
            })
        })
        .collect::<Result<Vec<_>, PlannerError>>()?;

    let regimen = Regimen::from_prescriptions(prescriptions)?;
    let cost = regimen.total_cost().ok_or_else(overflow)?;
    Ok((regimen, cost))
}


#[cfg(test)]
mod proptest_tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;
    use crate::models::Medication;

    const NAMES: [&str; 5] = ["MedA", "MedB", "MedC", "MedD", "MedE"];

    fn combination() -> impl Strategy<Value = MedicationCombination> {
        prop::collection::btree_map(prop::sample::select(NAMES.to_vec()), 1i64..20, 1..4)
            .prop_map(|m| MedicationCombination::new(m.into_iter().map(|(n, d)| (n, Decimal::from(d)))))
    }

    proptest! {
        /// The chosen regimen never contains a medication the patient is allergic to.
        #[test]
        fn regimen_avoids_allergens(
            combinations in prop::collection::vec(combination(), 0..6),
            allergies in prop::collection::hash_set(prop::sample::select(NAMES.to_vec()), 0..3),
            weight in 1i64..150,
        ) {
            let medications = NAMES
                .iter()
                .enumerate()
                .map(|(i, n)| Medication::new(*n, Decimal::from(i as i64 + 1)))
                .collect();
            let mut disease = Disease::new("D", ["x"]);
            disease.medication_combinations = combinations;
            let catalog = Catalog::new(vec![disease.clone()], vec![], medications).unwrap();
            let patient = Patient::new("P", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), Decimal::from(weight))
                .with_allergies(allergies.iter().copied());

            let regimen = best_combination(&patient, &disease, &catalog, UnknownMedicationPolicy::Skip).unwrap();
            for name in regimen.medication_names() {
                prop_assert!(!allergies.contains(name));
            }
        }
    }
}
