use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog medication.
///
/// Identity is the name alone: two records with the same name are equal
/// whatever their cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub cost_per_mg: Decimal,
}

impl Medication {
    pub fn new(name: impl Into<String>, cost_per_mg: Decimal) -> Self {
        Self {
            name: name.into(),
            cost_per_mg,
        }
    }
}

impl PartialEq for Medication {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Medication {}

/// A medication at a concrete dosage for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub medication: Medication,
    pub dosage_mg: Decimal,
}

impl Prescription {
    /// `dosage_mg * cost_per_mg`, or `None` if the product overflows.
    pub fn cost(&self) -> Option<Decimal> {
        self.dosage_mg.checked_mul(self.medication.cost_per_mg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_cost() {
        let a = Medication::new("Amoxicillin", Decimal::new(15, 1));
        let b = Medication::new("Amoxicillin", Decimal::new(99, 0));
        assert_eq!(a, b);
    }

    #[test]
    fn prescription_cost_is_dosage_times_unit_cost() {
        let rx = Prescription {
            medication: Medication::new("MedA", Decimal::new(15, 1)),
            dosage_mg: Decimal::from(20),
        };
        assert_eq!(rx.cost(), Some(Decimal::from(30)));
    }

    #[test]
    fn prescription_cost_overflow_is_none() {
        let rx = Prescription {
            medication: Medication::new("MedA", Decimal::from(1_000_000_000)),
            dosage_mg: Decimal::MAX,
        };
        assert_eq!(rx.cost(), None);
    }
}
