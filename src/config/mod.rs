//! Rate-table configuration for the Parafiscal Savings Engine.
//!
//! Contribution rates, the ARL risk-level table, the commission schedule,
//! split bounds, and the legal minimum salary are all loaded from YAML
//! rather than hard-coded, so a rate change is a config edit.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ArlRates, CommissionFile, CommissionSchedule, CommissionTier, ContributionRates, EngineConfig,
    FixedContributionRates, RatesFile, ScheduleMetadata, SplitBounds, ValidationRules,
};
