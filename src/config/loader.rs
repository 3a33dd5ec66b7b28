//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading SAD rate
//! tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AllowancesConfig, BahRatesConfig, PayGradesConfig, RateTables, ScheduleMetadata};

/// Loads and provides access to the SAD rate tables.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/sad/
/// ├── schedule.yaml    # Schedule metadata
/// ├── pay_grades.yaml  # Daily base pay by grade and years of service
/// ├── bah_rates.yaml   # Daily BAH by grade and dependency status
/// └── allowances.yaml  # BAS, per diem, minimum daily rate, Texas State Guard rates
/// ```
///
/// # Example
///
/// ```no_run
/// use sad_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sad").unwrap();
/// println!("Loaded schedule: {}", loader.tables().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: RateTables,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The E-1 fallback rates are absent (`MissingReferenceData`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;
        let pay_grades = Self::load_yaml::<PayGradesConfig>(&path.join("pay_grades.yaml"))?;
        let bah_rates = Self::load_yaml::<BahRatesConfig>(&path.join("bah_rates.yaml"))?;
        let allowances = Self::load_yaml::<AllowancesConfig>(&path.join("allowances.yaml"))?;

        let tables = RateTables::new(
            metadata,
            pay_grades.pay_grades,
            bah_rates.bah_rates,
            allowances,
        )?;

        tracing::debug!(
            path = %path.display(),
            schedule = %tables.metadata().name,
            version = %tables.metadata().version,
            "Loaded rate tables"
        );

        Ok(Self { tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate tables.
    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Consumes the loader and returns the rate tables.
    pub fn into_tables(self) -> RateTables {
        self.tables
    }
}
