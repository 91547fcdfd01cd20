use crate::planner::PlannerError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = PlannerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(PlannerError::Config(format!(
                        "invalid {}: {}",
                        stringify!($name),
                        s
                    ))),
                }
            }
        }
    };
}

// How repeated patient symptoms count toward an overlap ratio.
str_enum!(SymptomCounting {
    Distinct => "distinct",
    PerOccurrence => "per_occurrence",
});

// What the optimizer does with a combination naming a medication missing
// from the catalog.
str_enum!(UnknownMedicationPolicy {
    Skip => "skip",
    Fail => "fail",
});

// Kind of catalog entry, used in duplicate-name errors.
str_enum!(CatalogKind {
    Disease => "disease",
    Medication => "medication",
});
