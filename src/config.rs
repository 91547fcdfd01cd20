use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::enums::{SymptomCounting, UnknownMedicationPolicy};
use crate::planner::PlannerError;

/// Application-level constants
pub const APP_NAME: &str = "treatment-planner";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `tracing` filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "treatment_planner=info"
}

/// The date every age is measured against unless configured otherwise.
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 9, 1).unwrap_or_default()
}

/// Likelihood at or above which a disease (or a clinic's disease) qualifies.
pub fn default_threshold() -> Decimal {
    Decimal::new(70, 2)
}

/// Planner settings, fixed for the lifetime of a planner.
///
/// Every field is optional when loaded from JSON; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// "Today" for age computation.
    pub reference_date: NaiveDate,
    /// Inclusive lower bound on disease likelihood for the treatment plan.
    pub likelihood_threshold: Decimal,
    /// Inclusive lower bound on symptom overlap for clinic eligibility.
    pub clinic_symptom_threshold: Decimal,
    pub symptom_counting: SymptomCounting,
    pub unknown_medication: UnknownMedicationPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            likelihood_threshold: default_threshold(),
            clinic_symptom_threshold: default_threshold(),
            symptom_counting: SymptomCounting::Distinct,
            unknown_medication: UnknownMedicationPolicy::Skip,
        }
    }
}

impl PlannerConfig {
    /// Parse a JSON config document and check its thresholds.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PlannerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    pub fn with_symptom_counting(mut self, counting: SymptomCounting) -> Self {
        self.symptom_counting = counting;
        self
    }

    pub fn with_unknown_medication(mut self, policy: UnknownMedicationPolicy) -> Self {
        self.unknown_medication = policy;
        self
    }

    /// Thresholds are ratios and must lie in [0, 1].
    pub fn validate(&self) -> Result<(), PlannerError> {
        for (name, value) in [
            ("likelihood_threshold", self.likelihood_threshold),
            ("clinic_symptom_threshold", self.clinic_symptom_threshold),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(PlannerError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
