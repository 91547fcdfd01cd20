use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    pub name: String,
    /// Youngest admitted age in months, inclusive.
    pub min_age_months: u32,
    /// Oldest admitted age in months, inclusive. `None` means no upper bound.
    pub max_age_months: Option<u32>,
    /// Names of the diseases this clinic treats.
    pub diseases: Vec<String>,
}

impl Clinic {
    pub fn new(name: impl Into<String>, min_age_months: u32, max_age_months: Option<u32>) -> Self {
        Self {
            name: name.into(),
            min_age_months,
            max_age_months,
            diseases: Vec::new(),
        }
    }

    pub fn treating<I, S>(mut self, diseases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diseases = diseases.into_iter().map(Into::into).collect();
        self
    }

    pub fn admits_age(&self, age_in_months: u32) -> bool {
        age_in_months >= self.min_age_months
            && self.max_age_months.map_or(true, |max| age_in_months <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let clinic = Clinic::new("Pediatrics", 12, Some(216));
        assert!(!clinic.admits_age(11));
        assert!(clinic.admits_age(12));
        assert!(clinic.admits_age(216));
        assert!(!clinic.admits_age(217));
    }

    #[test]
    fn missing_max_is_unbounded() {
        let clinic = Clinic::new("General", 0, None);
        assert!(clinic.admits_age(0));
        assert!(clinic.admits_age(1200));
    }
}
