//! Configuration loading and management for the SAD Pay Engine.
//!
//! This module loads the reference rate tables (base pay brackets, BAH, BAS,
//! per diem, minimum daily rate and Texas State Guard flat rates) from YAML.
//! The tables are read-only once loaded.
//!
//! # Example
//!
//! ```no_run
//! use sad_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sad").unwrap();
//! println!("Loaded schedule: {}", config.tables().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowancesConfig, BahRate, BahRatesConfig, BasRates, PayBrackets, PayGradesConfig,
    RateTables, ScheduleMetadata, TexasStateGuardRates,
};

#[cfg(test)]
pub(crate) use types::test_support;
