use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::enums::CatalogKind;
use crate::models::{Clinic, Disease, Medication};

use super::types::PlannerError;

/// Immutable snapshot of the disease, clinic and medication catalogs.
///
/// Built once, then shared read-only (behind an `Arc`) by every planner and
/// request that uses it. Diseases and medications are indexed by name.
/// Construction also audits cross references; problems found there do not
/// reject the catalog, they are reported through [`Catalog::issues`] and the
/// affected entries are skipped at query time.
#[derive(Debug, Clone)]
pub struct Catalog {
    diseases: Vec<Disease>,
    clinics: Vec<Clinic>,
    medications: Vec<Medication>,
    disease_index: HashMap<String, usize>,
    medication_index: HashMap<String, usize>,
    issues: Vec<PlannerError>,
}

impl Catalog {
    /// Establish a catalog snapshot.
    ///
    /// Fails on duplicate disease or medication names, and on a medication
    /// with a negative cost per mg.
    pub fn new(
        diseases: Vec<Disease>,
        clinics: Vec<Clinic>,
        medications: Vec<Medication>,
    ) -> Result<Self, PlannerError> {
        let disease_index = index_by_name(&diseases, |d| &d.name, CatalogKind::Disease)?;
        let medication_index =
            index_by_name(&medications, |m| &m.name, CatalogKind::Medication)?;

        if let Some(med) = medications.iter().find(|m| m.cost_per_mg < Decimal::ZERO) {
            return Err(PlannerError::InvalidInput(format!(
                "medication {} has negative cost per mg {}",
                med.name, med.cost_per_mg
            )));
        }

        let mut catalog = Self {
            diseases,
            clinics,
            medications,
            disease_index,
            medication_index,
            issues: Vec::new(),
        };
        catalog.issues = catalog.audit();

        for issue in &catalog.issues {
            tracing::warn!(issue = %issue, "Catalog entry will be skipped during planning");
        }
        tracing::debug!(
            diseases = catalog.diseases.len(),
            clinics = catalog.clinics.len(),
            medications = catalog.medications.len(),
            issues = catalog.issues.len(),
            "Catalog snapshot established"
        );

        Ok(catalog)
    }

    /// Diseases in catalog order.
    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    /// Clinics in catalog order.
    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn disease(&self, name: &str) -> Option<&Disease> {
        self.disease_index.get(name).map(|&i| &self.diseases[i])
    }

    pub fn medication(&self, name: &str) -> Option<&Medication> {
        self.medication_index.get(name).map(|&i| &self.medications[i])
    }

    /// Problems found when the snapshot was built.
    pub fn issues(&self) -> &[PlannerError] {
        &self.issues
    }

    fn audit(&self) -> Vec<PlannerError> {
        let mut issues = Vec::new();

        for clinic in &self.clinics {
            for disease in &clinic.diseases {
                if self.disease(disease).is_none() {
                    issues.push(PlannerError::UnknownDisease {
                        clinic: clinic.name.clone(),
                        disease: disease.clone(),
                    });
                }
            }
        }

        for disease in &self.diseases {
            if disease.symptoms.is_empty() {
                issues.push(PlannerError::InvalidInput(format!(
                    "disease {} has no symptoms",
                    disease.name
                )));
            }

            for (index, combination) in disease.medication_combinations.iter().enumerate() {
                if combination.is_empty() {
                    issues.push(PlannerError::InvalidInput(format!(
                        "disease {} has an empty medication combination at position {index}",
                        disease.name
                    )));
                }
                for (medication, dosage) in &combination.dosages_per_kg {
                    if self.medication(medication).is_none() {
                        issues.push(PlannerError::UnknownMedication {
                            disease: disease.name.clone(),
                            medication: medication.clone(),
                        });
                    }
                    if *dosage <= Decimal::ZERO {
                        issues.push(PlannerError::InvalidInput(format!(
                            "disease {} prescribes non-positive dosage {dosage} of {medication}",
                            disease.name
                        )));
                    }
                }
            }
        }

        issues
    }
}

fn index_by_name<T>(
    entries: &[T],
    name: impl Fn(&T) -> &String,
    kind: CatalogKind,
) -> Result<HashMap<String, usize>, PlannerError> {
    let mut index = HashMap::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        if index.insert(name(entry).clone(), i).is_some() {
            return Err(PlannerError::DuplicateEntry {
                kind,
                name: name(entry).clone(),
            });
        }
    }
    Ok(index)
}
