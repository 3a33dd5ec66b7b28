//! Daily rate resolution.
//!
//! This module looks up the daily base pay, BAH and BAS rates for a grade and
//! computes the minimum income adjustment. Lookups never fail: a grade with no
//! configured table is paid from the E-1 table and the result is tagged
//! [`RateSource::Fallback`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{PayBrackets, RateTables};
use crate::models::{AuditStep, Grade};

use super::rounding::round_currency;

/// Where a resolved rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The grade's own table entry.
    Grade,
    /// The E-1 table, used because the grade has no entry.
    Fallback,
}

impl RateSource {
    fn as_str(&self) -> &'static str {
        match self {
            RateSource::Grade => "grade",
            RateSource::Fallback => "fallback",
        }
    }
}

/// The result of a daily base rate lookup.
#[derive(Debug, Clone)]
pub struct BaseRateResult {
    /// The daily base rate, unrounded.
    pub rate: Decimal,
    /// The years-of-service threshold applied.
    pub bracket: u32,
    /// Whether the grade's table or the fallback table was used.
    pub source: RateSource,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// The result of a daily BAH lookup.
#[derive(Debug, Clone)]
pub struct BahRateResult {
    /// The daily BAH rate, rounded to cents.
    pub rate: Decimal,
    /// Whether the grade's entry or the fallback entry was used.
    pub source: RateSource,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// The result of a daily BAS lookup.
#[derive(Debug, Clone)]
pub struct BasRateResult {
    /// The daily BAS rate, rounded to cents.
    pub rate: Decimal,
    /// True if the officer rate was applied.
    pub officer_rate: bool,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// The result of the minimum income check.
#[derive(Debug, Clone)]
pub struct MinimumIncomeAdjustmentResult {
    /// Daily top-up, zero when the subtotal already meets the minimum.
    pub adjustment: Decimal,
    /// Base + BAH + BAS + per diem before the top-up.
    pub daily_subtotal: Decimal,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

fn brackets_for(tables: &RateTables, grade: Grade) -> (Option<&PayBrackets>, RateSource) {
    match tables.pay_brackets(grade) {
        Some(brackets) => (Some(brackets), RateSource::Grade),
        None => (tables.pay_brackets(Grade::FALLBACK), RateSource::Fallback),
    }
}

/// Picks the greatest threshold not above `years`, or 0 when none qualifies.
fn select_bracket(brackets: &PayBrackets, years: i32) -> u32 {
    u32::try_from(years)
        .ok()
        .and_then(|years| brackets.range(..=years).next_back().map(|(k, _)| *k))
        .unwrap_or(0)
}

/// Resolves the daily base rate for a grade and years of service.
///
/// The rate is the value at the greatest configured threshold that does not
/// exceed `years_of_service`. Below every threshold (including negative years)
/// bracket 0 applies, and if bracket 0 is not configured the rate is zero.
///
/// # Examples
///
/// ```
/// use sad_pay_engine::calculation::{RateSource, resolve_base_rate};
/// use sad_pay_engine::config::ConfigLoader;
/// use sad_pay_engine::models::Grade;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = ConfigLoader::load("./config/sad").unwrap().into_tables();
/// let result = resolve_base_rate(&tables, Grade::E5, 3, 1);
/// assert_eq!(result.rate, Decimal::from_str("108.09").unwrap());
/// assert_eq!(result.bracket, 3);
/// assert_eq!(result.source, RateSource::Grade);
/// ```
pub fn resolve_base_rate(
    tables: &RateTables,
    grade: Grade,
    years_of_service: i32,
    step_number: u32,
) -> BaseRateResult {
    let (brackets, source) = brackets_for(tables, grade);
    if source == RateSource::Fallback {
        warn!(
            grade = %grade,
            fallback = %Grade::FALLBACK,
            "No pay table for grade, using fallback table"
        );
    }

    let (bracket, rate) = match brackets {
        Some(brackets) => {
            let bracket = select_bracket(brackets, years_of_service);
            (bracket, brackets.get(&bracket).copied().unwrap_or(Decimal::ZERO))
        }
        None => (0, Decimal::ZERO),
    };

    let reasoning = match source {
        RateSource::Grade => format!(
            "{} with {} years of service falls in the {}-year bracket: ${} per day",
            grade, years_of_service, bracket, rate
        ),
        RateSource::Fallback => format!(
            "{} has no pay table; {} {}-year bracket used: ${} per day",
            grade,
            Grade::FALLBACK,
            bracket,
            rate
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_rate_lookup".to_string(),
        rule_name: "Daily Base Rate Lookup".to_string(),
        input: serde_json::json!({
            "grade": grade.code(),
            "years_of_service": years_of_service
        }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "bracket": bracket,
            "source": source.as_str()
        }),
        reasoning,
    };

    BaseRateResult {
        rate,
        bracket,
        source,
        audit_step,
    }
}

/// Resolves the daily BAH rate for a grade, rounded to cents.
pub fn resolve_bah_rate(
    tables: &RateTables,
    grade: Grade,
    has_dependents: bool,
    step_number: u32,
) -> BahRateResult {
    let (entry, source) = match tables.bah_rate(grade) {
        Some(entry) => (Some(entry), RateSource::Grade),
        None => {
            warn!(
                grade = %grade,
                fallback = %Grade::FALLBACK,
                "No BAH rate for grade, using fallback rate"
            );
            (tables.bah_rate(Grade::FALLBACK), RateSource::Fallback)
        }
    };

    let configured = entry
        .map(|e| {
            if has_dependents {
                e.with_dependents
            } else {
                e.without_dependents
            }
        })
        .unwrap_or(Decimal::ZERO);
    let rate = round_currency(configured);

    let dependency = if has_dependents { "with" } else { "without" };
    let audit_step = AuditStep {
        step_number,
        rule_id: "bah_rate_lookup".to_string(),
        rule_name: "Daily BAH Lookup".to_string(),
        input: serde_json::json!({
            "grade": grade.code(),
            "has_dependents": has_dependents
        }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "source": source.as_str()
        }),
        reasoning: format!(
            "{} BAH {} dependents ({} table): ${} per day",
            grade,
            dependency,
            match source {
                RateSource::Grade => grade.code(),
                RateSource::Fallback => Grade::FALLBACK.code(),
            },
            rate
        ),
    };

    BahRateResult {
        rate,
        source,
        audit_step,
    }
}

/// Resolves the daily BAS rate: officer-class grades get the officer rate,
/// every other grade the enlisted rate.
pub fn resolve_bas_rate(tables: &RateTables, grade: Grade, step_number: u32) -> BasRateResult {
    let officer_rate = grade.is_officer_class();
    let rate = round_currency(if officer_rate {
        tables.bas().officer
    } else {
        tables.bas().enlisted
    });

    let audit_step = AuditStep {
        step_number,
        rule_id: "bas_rate_lookup".to_string(),
        rule_name: "Daily BAS Lookup".to_string(),
        input: serde_json::json!({
            "grade": grade.code(),
            "officer_class": officer_rate
        }),
        output: serde_json::json!({
            "rate": rate.to_string()
        }),
        reasoning: format!(
            "{} receives the {} BAS rate: ${} per day",
            grade,
            if officer_rate { "officer" } else { "enlisted" },
            rate
        ),
    };

    BasRateResult {
        rate,
        officer_rate,
        audit_step,
    }
}

/// Computes the daily top-up that brings base + BAH + BAS + per diem up to
/// the configured minimum daily rate.
///
/// # Examples
///
/// ```
/// use sad_pay_engine::calculation::resolve_minimum_income_adjustment;
/// use sad_pay_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = ConfigLoader::load("./config/sad").unwrap().into_tables();
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// // 67.24 + 45.00 + 15.53 + 30.00 = 157.77, short of 175.00 by 17.23
/// let result = resolve_minimum_income_adjustment(&tables, dec("67.24"), dec("45.00"), dec("15.53"), 4);
/// assert_eq!(result.adjustment, dec("17.23"));
/// ```
pub fn resolve_minimum_income_adjustment(
    tables: &RateTables,
    base_rate: Decimal,
    bah_rate: Decimal,
    bas_rate: Decimal,
    step_number: u32,
) -> MinimumIncomeAdjustmentResult {
    let per_diem = tables.per_diem_rate();
    let minimum = tables.minimum_daily_rate();
    let daily_subtotal = base_rate + bah_rate + bas_rate + per_diem;

    let adjustment = if daily_subtotal < minimum {
        minimum - daily_subtotal
    } else {
        Decimal::ZERO
    };

    let reasoning = if adjustment > Decimal::ZERO {
        format!(
            "Daily subtotal ${} is below the ${} minimum; adding ${} per day",
            daily_subtotal, minimum, adjustment
        )
    } else {
        format!(
            "Daily subtotal ${} meets the ${} minimum; no adjustment",
            daily_subtotal, minimum
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "minimum_income_adjustment".to_string(),
        rule_name: "Minimum Income Adjustment".to_string(),
        input: serde_json::json!({
            "base_rate": base_rate.to_string(),
            "bah_rate": bah_rate.to_string(),
            "bas_rate": bas_rate.to_string(),
            "per_diem_rate": per_diem.to_string(),
            "minimum_daily_rate": minimum.to_string()
        }),
        output: serde_json::json!({
            "daily_subtotal": daily_subtotal.to_string(),
            "adjustment": adjustment.to_string()
        }),
        reasoning,
    };

    MinimumIncomeAdjustmentResult {
        adjustment,
        daily_subtotal,
        audit_step,
    }
}

/// Records that a submitted grade code named no known grade and is paid at
/// [`Grade::FALLBACK`] rates.
pub fn record_grade_fallback(requested: &str, step_number: u32) -> AuditStep {
    warn!(
        requested,
        fallback = %Grade::FALLBACK,
        "Unrecognized grade, using fallback rates"
    );

    AuditStep {
        step_number,
        rule_id: "grade_fallback".to_string(),
        rule_name: "Unrecognized Grade".to_string(),
        input: serde_json::json!({ "grade": requested }),
        output: serde_json::json!({
            "grade": Grade::FALLBACK.code(),
            "source": RateSource::Fallback.as_str()
        }),
        reasoning: format!(
            "'{}' is not a known grade; {} rates used",
            requested,
            Grade::FALLBACK
        ),
    }
}
