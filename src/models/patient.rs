use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::planner::PlannerError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub date_of_birth: NaiveDate,
    /// Body weight in kilograms.
    pub weight_kg: Decimal,
    /// Reported symptoms, in the order given. May contain repeats.
    pub symptoms: Vec<String>,
    /// Names of medications the patient must not receive.
    pub medication_allergies: HashSet<String>,
    /// Medical record number. Identity only, never used in matching.
    pub mrn: String,
}

impl Patient {
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate, weight_kg: Decimal) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            weight_kg,
            symptoms: Vec::new(),
            medication_allergies: HashSet::new(),
            mrn: String::new(),
        }
    }

    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allergies<I, S>(mut self, allergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medication_allergies = allergies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mrn(mut self, mrn: impl Into<String>) -> Self {
        self.mrn = mrn.into();
        self
    }

    pub fn is_allergic_to(&self, medication: &str) -> bool {
        self.medication_allergies.contains(medication)
    }

    /// Reject a patient whose weight cannot produce a dosage.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.weight_kg <= Decimal::ZERO {
            return Err(PlannerError::InvalidInput(format!(
                "patient {} has non-positive weight {}kg",
                self.mrn, self.weight_kg
            )));
        }
        Ok(())
    }
}
