use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One treatment option: medication name to dosage in mg per kg of body weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedicationCombination {
    pub dosages_per_kg: BTreeMap<String, Decimal>,
}

impl MedicationCombination {
    pub fn new<I, S>(dosages: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            dosages_per_kg: dosages
                .into_iter()
                .map(|(name, dosage)| (name.into(), dosage))
                .collect(),
        }
    }

    pub fn medication_names(&self) -> impl Iterator<Item = &str> {
        self.dosages_per_kg.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.dosages_per_kg.is_empty()
    }
}

/// A catalog disease. Identity is the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    pub symptoms: Vec<String>,
    /// Treatment options in preference order; earlier wins a cost tie.
    pub medication_combinations: Vec<MedicationCombination>,
}

impl Disease {
    pub fn new<I, S>(name: impl Into<String>, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            medication_combinations: Vec::new(),
        }
    }

    pub fn with_combination(mut self, combination: MedicationCombination) -> Self {
        self.medication_combinations.push(combination);
        self
    }
}

impl PartialEq for Disease {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Disease {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_names_are_sorted_and_unique() {
        let combo = MedicationCombination::new([
            ("MedB", Decimal::ONE),
            ("MedA", Decimal::from(2)),
            ("MedB", Decimal::from(3)),
        ]);
        let names: Vec<&str> = combo.medication_names().collect();
        assert_eq!(names, vec!["MedA", "MedB"]);
        assert_eq!(combo.dosages_per_kg["MedB"], Decimal::from(3));
    }

    #[test]
    fn disease_identity_is_name() {
        let a = Disease::new("Flu", ["fever"]);
        let b = Disease::new("Flu", ["cough", "chills"]);
        assert_eq!(a, b);
    }

    #[test]
    fn combination_deserializes_from_plain_map() {
        let combo: MedicationCombination =
            serde_json::from_str(r#"{"MedA": "2", "MedB": "0.5"}"#).unwrap();
        assert_eq!(combo.dosages_per_kg["MedB"], Decimal::new(5, 1));
    }
}
