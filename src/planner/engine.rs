use std::sync::Arc;
use std::time::Instant;

use crate::config::PlannerConfig;
use crate::models::{
    AgeBreakdown, Clinic, Disease, DiseaseLikelihood, Medication, Patient, Regimen, TreatmentPlan,
};

use super::age::age_breakdown;
use super::catalog::Catalog;
use super::clinics::eligible_clinics;
use super::likelihood::{disease_likelihoods, qualifying};
use super::optimizer::best_combination;
use super::types::{PlannerError, TreatmentPlanner};

/// Default implementation of the treatment planner.
/// Answers every query from one shared catalog snapshot and a fixed config.
#[derive(Debug, Clone)]
pub struct DefaultTreatmentPlanner {
    catalog: Arc<Catalog>,
    config: PlannerConfig,
}

impl DefaultTreatmentPlanner {
    pub fn new(catalog: Arc<Catalog>, config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Build a catalog snapshot from raw records and plan with the default config.
    pub fn configure(
        diseases: Vec<Disease>,
        clinics: Vec<Clinic>,
        medications: Vec<Medication>,
    ) -> Result<Self, PlannerError> {
        let catalog = Catalog::new(diseases, clinics, medications)?;
        Self::new(Arc::new(catalog), PlannerConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Best regimen per qualifying disease, summed by medication name.
    /// A disease whose regimen cannot be computed contributes nothing; a sum
    /// that overflows fails the plan.
    fn aggregate_medications(
        &self,
        patient: &Patient,
        diagnoses: &[DiseaseLikelihood],
    ) -> Result<Regimen, PlannerError> {
        let mut total = Regimen::default();

        for diagnosis in diagnoses {
            let Some(disease) = self.catalog.disease(&diagnosis.disease) else {
                continue;
            };
            match best_combination(patient, disease, &self.catalog, self.config.unknown_medication)
            {
                Ok(regimen) => total.merge(regimen)?,
                Err(e) => {
                    tracing::warn!(
                        disease = %disease.name,
                        error = %e,
                        "No regimen for disease, excluded from plan"
                    );
                }
            }
        }

        Ok(total)
    }
}

impl TreatmentPlanner for DefaultTreatmentPlanner {
    fn age_in_years(&self, patient: &Patient) -> Result<u32, PlannerError> {
        Ok(self.age_breakdown(patient)?.years)
    }

    fn age_in_months(&self, patient: &Patient) -> Result<u32, PlannerError> {
        Ok(self.age_breakdown(patient)?.total_months())
    }

    fn age_breakdown(&self, patient: &Patient) -> Result<AgeBreakdown, PlannerError> {
        age_breakdown(patient.date_of_birth, self.config.reference_date)
    }

    fn eligible_clinics(&self, patient: &Patient) -> Result<Vec<Clinic>, PlannerError> {
        let age_in_months = self.age_in_months(patient)?;
        Ok(eligible_clinics(
            patient,
            age_in_months,
            &self.catalog,
            self.config.clinic_symptom_threshold,
            self.config.symptom_counting,
        ))
    }

    fn disease_likelihoods(&self, patient: &Patient) -> Vec<DiseaseLikelihood> {
        disease_likelihoods(patient, &self.catalog, self.config.symptom_counting)
    }

    fn best_medication_combination(
        &self,
        patient: &Patient,
        disease: &Disease,
    ) -> Result<Regimen, PlannerError> {
        patient.validate()?;
        best_combination(patient, disease, &self.catalog, self.config.unknown_medication)
    }

    fn treatment_plan(&self, patient: &Patient) -> Result<TreatmentPlan, PlannerError> {
        let start = Instant::now();

        patient.validate()?;
        let age = self.age_breakdown(patient)?;
        let clinics = eligible_clinics(
            patient,
            age.total_months(),
            &self.catalog,
            self.config.clinic_symptom_threshold,
            self.config.symptom_counting,
        );
        let diagnoses = qualifying(
            self.disease_likelihoods(patient),
            self.config.likelihood_threshold,
        );
        let medications = self.aggregate_medications(patient, &diagnoses)?;

        let plan = TreatmentPlan {
            clinics,
            age_years: age.years,
            age_months: age.months,
            diagnoses,
            medications,
        };

        tracing::info!(
            mrn = %patient.mrn,
            clinics = plan.clinics.len(),
            diagnoses = plan.diagnoses.len(),
            medications = plan.medications.len(),
            processing_us = start.elapsed().as_micros() as u64,
            "Treatment plan assembled"
        );

        Ok(plan)
    }
}
