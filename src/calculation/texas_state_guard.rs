//! Texas State Guard pay.
//!
//! Members of the Texas State Guard are paid flat daily rates regardless of
//! grade. The monthly total is the configured total daily rate times days and
//! is not derived from the three components.

use rust_decimal::Decimal;

use crate::config::RateTables;
use crate::models::{AuditStep, MonthlyBreakdown, TexasStateGuardDailyRates};

use super::month_segments::MonthSegment;
use super::rounding::round_currency;

/// Flat daily rates for a Texas State Guard calculation, with audit step.
#[derive(Debug, Clone)]
pub struct TexasStateGuardRatesResult {
    /// The daily rates.
    pub rates: TexasStateGuardDailyRates,
    /// The audit step recording the rates applied.
    pub audit_step: AuditStep,
}

/// Reads the Texas State Guard flat rates from the tables.
pub fn resolve_texas_state_guard_rates(
    tables: &RateTables,
    step_number: u32,
) -> TexasStateGuardRatesResult {
    let configured = tables.texas_state_guard();
    let rates = TexasStateGuardDailyRates {
        base_rate: configured.daily_base_rate,
        special_pay_rate: configured.special_pay,
        allowance_rate: configured.daily_allowance,
        total_rate: configured.total_daily_rate,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "texas_state_guard_rates".to_string(),
        rule_name: "Texas State Guard Flat Rates".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({
            "base_rate": rates.base_rate.to_string(),
            "special_pay_rate": rates.special_pay_rate.to_string(),
            "allowance_rate": rates.allowance_rate.to_string(),
            "total_rate": rates.total_rate.to_string()
        }),
        reasoning: format!(
            "Texas State Guard flat rates: base ${}, special ${}, allowance ${}; ${} per day paid",
            rates.base_rate, rates.special_pay_rate, rates.allowance_rate, rates.total_rate
        ),
    };

    TexasStateGuardRatesResult { rates, audit_step }
}

/// Calculates one month of Texas State Guard pay.
pub fn calculate_texas_state_guard_month(
    segment: &MonthSegment,
    rates: &TexasStateGuardDailyRates,
) -> MonthlyBreakdown {
    let days = Decimal::from(segment.days);

    MonthlyBreakdown {
        month: segment.month,
        label: segment.month.label(),
        start_date: segment.start_date,
        end_date: segment.end_date,
        days: segment.days,
        base_pay: round_currency(rates.base_rate * days),
        bah: Decimal::ZERO,
        bas: Decimal::ZERO,
        per_diem: Decimal::ZERO,
        minimum_income_adjustment: Decimal::ZERO,
        hazard_pay: Decimal::ZERO,
        hardship_pay: Decimal::ZERO,
        danger_pay: Decimal::ZERO,
        special_pay: round_currency(rates.special_pay_rate * days),
        allowances: round_currency(rates.allowance_rate * days),
        total: round_currency(rates.total_rate * days),
    }
}
