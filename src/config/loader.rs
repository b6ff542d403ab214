//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! rate tables from YAML files, plus a compiled-in copy of the shipped
//! tables for consumers that have no configuration directory.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    CommissionFile, CommissionSchedule, ContributionRates, EngineConfig, RatesFile,
    ScheduleMetadata, SplitBounds, ValidationRules,
};

/// The `rates.yaml` shipped with this crate, embedded at compile time.
const BUILTIN_RATES: &str = include_str!("../../config/tikin/rates.yaml");

/// The `commission.yaml` shipped with this crate, embedded at compile time.
const BUILTIN_COMMISSION: &str = include_str!("../../config/tikin/commission.yaml");

/// Loads and provides access to the engine's rate configuration.
///
/// The `ConfigLoader` reads YAML rate tables from a directory and provides
/// methods to query contribution rates, split bounds, validation rules, and
/// the commission schedule.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/tikin/
/// ├── rates.yaml       # Contribution rates, ARL table, split bounds
/// └── commission.yaml  # Tiered fee schedule and IVA rate
/// ```
///
/// # Example
///
/// ```no_run
/// use tikin_engine::config::ConfigLoader;
/// use tikin_engine::models::ArlRiskLevel;
///
/// let loader = ConfigLoader::load("./config/tikin").unwrap();
/// let arl_rate = loader.rates().arl_rate(ArlRiskLevel::I);
/// println!("ARL level I rate: {}", arl_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tikin")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either YAML file is missing
    /// - Either file contains invalid YAML
    /// - The commission schedule or split bounds are inconsistent
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tikin_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tikin")?;
    /// # Ok::<(), tikin_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates_path = path.join("rates.yaml");
        let rates_file = Self::load_yaml::<RatesFile>(&rates_path)?;

        let commission_path = path.join("commission.yaml");
        let commission_file = Self::load_yaml::<CommissionFile>(&commission_path)?;
        let commission =
            CommissionSchedule::from_file(commission_file, &commission_path.display().to_string())?;

        let config = EngineConfig::new(rates_file, commission)?;

        Ok(Self { config })
    }

    /// Builds a loader from the rate tables compiled into the crate.
    ///
    /// These are the same YAML files shipped under `config/tikin/`, so the
    /// result matches `ConfigLoader::load("./config/tikin")` without touching
    /// the filesystem.
    pub fn builtin() -> EngineResult<Self> {
        let rates_file = Self::parse_yaml::<RatesFile>(BUILTIN_RATES, "builtin:rates.yaml")?;
        let commission_file =
            Self::parse_yaml::<CommissionFile>(BUILTIN_COMMISSION, "builtin:commission.yaml")?;
        let commission = CommissionSchedule::from_file(commission_file, "builtin:commission.yaml")?;

        let config = EngineConfig::new(rates_file, commission)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    /// Parses YAML content, attributing failures to the given path.
    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn schedule(&self) -> &ScheduleMetadata {
        self.config.schedule()
    }

    /// Returns the contribution rates.
    pub fn rates(&self) -> &ContributionRates {
        self.config.rates()
    }

    /// Returns the salary-split bounds.
    pub fn split(&self) -> &SplitBounds {
        self.config.split()
    }

    /// Returns the roster validation rules.
    pub fn validation(&self) -> &ValidationRules {
        self.config.validation()
    }

    /// Returns the commission schedule.
    pub fn commission(&self) -> &CommissionSchedule {
        self.config.commission()
    }
}
