//! Configuration types for SAD pay rates.
//!
//! This module contains the strongly-typed rate tables that are deserialized
//! from YAML configuration files.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Grade;

/// Metadata about the rate schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// Human-readable schedule name.
    pub name: String,
    /// Schedule version label.
    pub version: String,
    /// Date the rates took effect.
    pub effective_date: NaiveDate,
    /// Where the rates were published.
    pub source: String,
}

/// Years-of-service threshold to daily base rate.
pub type PayBrackets = BTreeMap<u32, Decimal>;

/// pay_grades.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PayGradesConfig {
    /// Bracket table per grade.
    pub pay_grades: HashMap<Grade, PayBrackets>,
}

/// Daily BAH for one grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BahRate {
    /// Rate for members with dependents.
    pub with_dependents: Decimal,
    /// Rate for members without dependents.
    pub without_dependents: Decimal,
}

/// bah_rates.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BahRatesConfig {
    /// BAH rates per grade.
    pub bah_rates: HashMap<Grade, BahRate>,
}

/// Daily BAS constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BasRates {
    /// Rate for officer-class grades.
    pub officer: Decimal,
    /// Rate for every other grade.
    pub enlisted: Decimal,
}

/// Flat daily Texas State Guard rates.
///
/// `total_daily_rate` is configured on its own and is not required to equal
/// the sum of the other three rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TexasStateGuardRates {
    /// Daily base pay.
    pub daily_base_rate: Decimal,
    /// Daily special pay.
    pub special_pay: Decimal,
    /// Daily allowance.
    pub daily_allowance: Decimal,
    /// Daily total paid.
    pub total_daily_rate: Decimal,
}

/// allowances.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowancesConfig {
    /// Flat daily per diem.
    pub per_diem_rate: Decimal,
    /// Daily income floor for base + BAH + BAS + per diem.
    pub minimum_daily_rate: Decimal,
    /// BAS constants.
    pub bas: BasRates,
    /// Texas State Guard flat rates.
    pub texas_state_guard: TexasStateGuardRates,
}

/// The complete, validated set of rate tables.
///
/// Construction guarantees that the E-1 fallback entries exist in both the pay
/// and BAH tables, so lookups never fail.
#[derive(Debug, Clone)]
pub struct RateTables {
    metadata: ScheduleMetadata,
    pay_grades: HashMap<Grade, PayBrackets>,
    bah_rates: HashMap<Grade, BahRate>,
    allowances: AllowancesConfig,
}

impl RateTables {
    /// Creates rate tables from their component parts.
    ///
    /// Returns `MissingReferenceData` if either grade table is empty or lacks
    /// the E-1 fallback entry.
    pub fn new(
        metadata: ScheduleMetadata,
        pay_grades: HashMap<Grade, PayBrackets>,
        bah_rates: HashMap<Grade, BahRate>,
        allowances: AllowancesConfig,
    ) -> EngineResult<Self> {
        let fallback_brackets = pay_grades.get(&Grade::FALLBACK).ok_or_else(|| {
            EngineError::MissingReferenceData {
                table: "pay_grades".to_string(),
                message: format!("no {} fallback table", Grade::FALLBACK),
            }
        })?;
        if fallback_brackets.is_empty() {
            return Err(EngineError::MissingReferenceData {
                table: "pay_grades".to_string(),
                message: format!("{} fallback table has no brackets", Grade::FALLBACK),
            });
        }
        if !bah_rates.contains_key(&Grade::FALLBACK) {
            return Err(EngineError::MissingReferenceData {
                table: "bah_rates".to_string(),
                message: format!("no {} fallback rate", Grade::FALLBACK),
            });
        }

        Ok(Self {
            metadata,
            pay_grades,
            bah_rates,
            allowances,
        })
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the bracket table configured for a grade, if any.
    pub fn pay_brackets(&self, grade: Grade) -> Option<&PayBrackets> {
        self.pay_grades.get(&grade)
    }

    /// Returns the BAH rates configured for a grade, if any.
    pub fn bah_rate(&self, grade: Grade) -> Option<&BahRate> {
        self.bah_rates.get(&grade)
    }

    /// Returns the BAS constants.
    pub fn bas(&self) -> &BasRates {
        &self.allowances.bas
    }

    /// Returns the daily per diem.
    pub fn per_diem_rate(&self) -> Decimal {
        self.allowances.per_diem_rate
    }

    /// Returns the minimum daily rate.
    pub fn minimum_daily_rate(&self) -> Decimal {
        self.allowances.minimum_daily_rate
    }

    /// Returns the Texas State Guard flat rates.
    pub fn texas_state_guard(&self) -> &TexasStateGuardRates {
        &self.allowances.texas_state_guard
    }
}
