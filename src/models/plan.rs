use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::clinic::Clinic;
use super::medication::Prescription;
use crate::planner::PlannerError;

/// Calendar age: whole years plus the remaining whole months (0-11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
}

impl AgeBreakdown {
    pub fn from_total_months(total: u32) -> Self {
        Self {
            years: total / 12,
            months: total % 12,
        }
    }

    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseLikelihood {
    pub disease: String,
    /// Overlap ratio rounded half-up to two decimal places, within [0, 1].
    pub likelihood: Decimal,
}

/// The winning medication combination for one disease, keyed by medication name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Regimen {
    pub prescriptions: BTreeMap<String, Prescription>,
}

impl Regimen {
    pub fn get(&self, medication: &str) -> Option<&Prescription> {
        self.prescriptions.get(medication)
    }

    pub fn is_empty(&self) -> bool {
        self.prescriptions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prescriptions.len()
    }

    pub fn medication_names(&self) -> impl Iterator<Item = &str> {
        self.prescriptions.keys().map(String::as_str)
    }

    /// Sum of prescription costs, or `None` if any step overflows.
    pub fn total_cost(&self) -> Option<Decimal> {
        self.prescriptions
            .values()
            .try_fold(Decimal::ZERO, |total, rx| total.checked_add(rx.cost()?))
    }

    /// Build a regimen, summing dosages of prescriptions that share a
    /// medication name.
    pub fn from_prescriptions<I>(prescriptions: I) -> Result<Self, PlannerError>
    where
        I: IntoIterator<Item = Prescription>,
    {
        let mut regimen = Regimen::default();
        for rx in prescriptions {
            regimen.add(rx)?;
        }
        Ok(regimen)
    }

    /// Add a prescription, summing its dosage into an existing entry for the
    /// same medication name. Fails if the summed dosage overflows.
    pub fn add(&mut self, rx: Prescription) -> Result<(), PlannerError> {
        match self.prescriptions.entry(rx.medication.name.clone()) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.dosage_mg = existing
                    .dosage_mg
                    .checked_add(rx.dosage_mg)
                    .ok_or_else(|| {
                        PlannerError::InvalidInput(format!(
                            "total dosage of {} exceeds the decimal range",
                            rx.medication.name
                        ))
                    })?;
            }
            Entry::Vacant(entry) => {
                entry.insert(rx);
            }
        }
        Ok(())
    }

    pub fn merge(&mut self, other: Regimen) -> Result<(), PlannerError> {
        for rx in other.prescriptions.into_values() {
            self.add(rx)?;
        }
        Ok(())
    }
}

/// Everything recommended for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPlan {
    /// Eligible clinics in catalog order, each at most once.
    pub clinics: Vec<Clinic>,
    pub age_years: u32,
    pub age_months: u32,
    /// Diseases at or above the likelihood threshold, in catalog order.
    pub diagnoses: Vec<DiseaseLikelihood>,
    /// Total dosage per medication across all diagnoses.
    pub medications: Regimen,
}

impl TreatmentPlan {
    pub fn age(&self) -> AgeBreakdown {
        AgeBreakdown {
            years: self.age_years,
            months: self.age_months,
        }
    }

    pub fn total_cost(&self) -> Option<Decimal> {
        self.medications.total_cost()
    }
}
