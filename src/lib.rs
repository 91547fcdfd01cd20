pub mod config;
pub mod models;
pub mod planner;

pub use config::PlannerConfig;
pub use models::{
    AgeBreakdown, Clinic, Disease, DiseaseLikelihood, Medication, MedicationCombination, Patient,
    Prescription, Regimen, TreatmentPlan,
};
pub use planner::{Catalog, DefaultTreatmentPlanner, PlannerError, TreatmentPlanner};

use tracing_subscriber::EnvFilter;

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`config::default_log_filter`]. Does nothing if a global subscriber is
/// already set.
pub fn init_logging() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} logging initialized v{}", config::APP_NAME, config::APP_VERSION);
    }
}
