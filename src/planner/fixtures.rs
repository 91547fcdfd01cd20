//! Shared catalog and patients for planner tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Clinic, Disease, Medication, MedicationCombination, Patient};

use super::catalog::Catalog;

fn combo(items: &[(&str, Decimal)]) -> MedicationCombination {
    MedicationCombination::new(items.iter().map(|(name, dosage)| (*name, *dosage)))
}

pub fn diseases() -> Vec<Disease> {
    vec![
        Disease::new("Common Cold", ["runny nose", "sneezing", "sore throat"])
            .with_combination(combo(&[("Pseudoephedrine", Decimal::ONE)]))
            .with_combination(combo(&[("Acetaminophen", Decimal::from(10))])),
        Disease::new("Flu", ["fever", "cough", "body aches", "fatigue"])
            .with_combination(combo(&[
                ("Oseltamivir", Decimal::from(2)),
                ("Acetaminophen", Decimal::from(10)),
            ]))
            .with_combination(combo(&[
                ("Zanamivir", Decimal::ONE),
                ("Ibuprofen", Decimal::from(10)),
            ])),
        Disease::new("Strep Throat", ["sore throat", "fever", "swollen lymph nodes"])
            .with_combination(combo(&[("Penicillin", Decimal::from(5))]))
            .with_combination(combo(&[("Amoxicillin", Decimal::from(8))])),
        Disease::new("Viral Fever", ["fever", "fatigue"])
            .with_combination(combo(&[("Ibuprofen", Decimal::from(5))]))
            .with_combination(combo(&[("Acetaminophen", Decimal::from(10))])),
    ]
}

pub fn medications() -> Vec<Medication> {
    vec![
        Medication::new("Acetaminophen", Decimal::new(5, 2)),
        Medication::new("Amoxicillin", Decimal::new(1, 1)),
        Medication::new("Ibuprofen", Decimal::new(2, 2)),
        Medication::new("Oseltamivir", Decimal::new(4, 1)),
        Medication::new("Penicillin", Decimal::new(8, 2)),
        Medication::new("Pseudoephedrine", Decimal::new(3, 1)),
        Medication::new("Zanamivir", Decimal::new(9, 1)),
    ]
}

pub fn clinics() -> Vec<Clinic> {
    vec![
        Clinic::new("General Hospital", 0, None).treating(["Common Cold", "Flu", "Strep Throat"]),
        Clinic::new("Pediatric Clinic", 0, Some(216)).treating(["Flu", "Strep Throat"]),
        Clinic::new("ENT Specialists", 24, None).treating(["Strep Throat", "Common Cold"]),
        Clinic::new("Respiratory Center", 0, None).treating(["Flu"]),
    ]
}

pub fn catalog() -> Catalog {
    Catalog::new(diseases(), clinics(), medications()).unwrap()
}

/// 70kg adult, 31 years 2 months old on 2016-09-01.
///
/// Scores: Common Cold 0.33, Flu 0.75, Strep Throat 0.67, Viral Fever 1.00.
pub fn flu_patient() -> Patient {
    Patient::new(
        "Jordan Reyes",
        NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
        Decimal::from(70),
    )
    .with_symptoms(["fever", "cough", "fatigue", "sore throat"])
    .with_mrn("MRN-0001")
}
