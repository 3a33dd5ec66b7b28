//! Army and Air National Guard pay.
//!
//! Daily rates are resolved once per calculation from the grade tables; each
//! month then pays `rate × days` for every daily component plus the flat
//! duty pays.

use rust_decimal::Decimal;

use crate::config::RateTables;
use crate::models::{AuditStep, MonthlyBreakdown, PayInput, StandardDailyRates};

use super::duty_pay::DutyPay;
use super::month_segments::MonthSegment;
use super::rate_resolver::{
    resolve_bah_rate, resolve_bas_rate, resolve_base_rate, resolve_minimum_income_adjustment,
};
use super::rounding::round_currency;

/// Resolved daily rates for a National Guard calculation, with audit steps.
#[derive(Debug, Clone)]
pub struct StandardRatesResult {
    /// The daily rates.
    pub rates: StandardDailyRates,
    /// The audit steps (base rate, BAH, BAS, minimum income adjustment).
    pub audit_steps: Vec<AuditStep>,
}

/// Resolves every daily rate a National Guard calculation needs.
pub fn resolve_standard_rates(
    input: &PayInput,
    tables: &RateTables,
    start_step_number: u32,
) -> StandardRatesResult {
    let mut audit_steps = Vec::with_capacity(4);
    let mut current_step = start_step_number;

    let base = resolve_base_rate(tables, input.grade, input.years_of_service, current_step);
    audit_steps.push(base.audit_step);
    current_step += 1;

    let bah = resolve_bah_rate(tables, input.grade, input.has_dependents, current_step);
    audit_steps.push(bah.audit_step);
    current_step += 1;

    let bas = resolve_bas_rate(tables, input.grade, current_step);
    audit_steps.push(bas.audit_step);
    current_step += 1;

    let adjustment =
        resolve_minimum_income_adjustment(tables, base.rate, bah.rate, bas.rate, current_step);
    audit_steps.push(adjustment.audit_step);

    StandardRatesResult {
        rates: StandardDailyRates {
            base_rate: base.rate,
            bah_rate: bah.rate,
            bas_rate: bas.rate,
            per_diem_rate: tables.per_diem_rate(),
            minimum_income_adjustment: adjustment.adjustment,
        },
        audit_steps,
    }
}

/// Calculates one month of National Guard pay.
///
/// Each component is rounded to cents. The total is the rounded sum of the
/// unrounded components, so it can differ by a cent from the sum of the
/// stored components.
pub fn calculate_standard_month(
    segment: &MonthSegment,
    rates: &StandardDailyRates,
    duty_pay: &DutyPay,
) -> MonthlyBreakdown {
    let days = Decimal::from(segment.days);

    let base_pay = rates.base_rate * days;
    let bah = rates.bah_rate * days;
    let bas = rates.bas_rate * days;
    let per_diem = rates.per_diem_rate * days;
    let minimum_income_adjustment = rates.minimum_income_adjustment * days;

    let total = base_pay + bah + bas + per_diem + minimum_income_adjustment + duty_pay.total();

    MonthlyBreakdown {
        month: segment.month,
        label: segment.month.label(),
        start_date: segment.start_date,
        end_date: segment.end_date,
        days: segment.days,
        base_pay: round_currency(base_pay),
        bah: round_currency(bah),
        bas: round_currency(bas),
        per_diem: round_currency(per_diem),
        minimum_income_adjustment: round_currency(minimum_income_adjustment),
        hazard_pay: round_currency(duty_pay.hazard_pay),
        hardship_pay: round_currency(duty_pay.hardship_pay),
        danger_pay: round_currency(duty_pay.danger_pay),
        special_pay: Decimal::ZERO,
        allowances: Decimal::ZERO,
        total: round_currency(total),
    }
}
