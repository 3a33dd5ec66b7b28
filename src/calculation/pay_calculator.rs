//! The main pay calculation entry point.
//!
//! [`calculate_pay`] walks the input's date range month by month and applies
//! either the Texas State Guard flat-rate policy or the National Guard
//! grade-based policy.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateTables;
use crate::models::{AuditStep, DailyRates, MonthlyBreakdown, PayInput, PayResult};

use super::duty_pay::calculate_duty_pay;
use super::month_segments::{MonthSegment, segment_by_month};
use super::rate_resolver::record_grade_fallback;
use super::rounding::round_currency;
use super::standard_pay::{calculate_standard_month, resolve_standard_rates};
use super::texas_state_guard::{
    calculate_texas_state_guard_month, resolve_texas_state_guard_rates,
};

/// Calculates pay for a validated input.
///
/// The input is trusted: an inverted range produces an empty breakdown with a
/// non-positive `total_days`. The result carries no timestamps, so the same
/// input and tables always produce an equal result.
///
/// # Examples
///
/// ```
/// use sad_pay_engine::calculation::calculate_pay;
/// use sad_pay_engine::config::ConfigLoader;
/// use sad_pay_engine::models::{Grade, PayInput, ServiceCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tables = ConfigLoader::load("./config/sad").unwrap().into_tables();
/// let input = PayInput::new(
///     ServiceCategory::ArmyNationalGuard,
///     Grade::E1,
///     0,
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
/// );
///
/// let result = calculate_pay(&input, &tables);
/// assert_eq!(result.monthly_breakdown.len(), 2);
/// assert_eq!(result.total_days, 27);
/// assert_eq!(result.grand_total, Decimal::from_str("4725.00").unwrap());
/// ```
pub fn calculate_pay(input: &PayInput, tables: &RateTables) -> PayResult {
    let segments = segment_by_month(input.start_date, input.end_date);
    let mut audit_trace = Vec::new();
    let mut current_step = 1;

    let (daily_rates, monthly_breakdown) = if input.service_category.uses_flat_rates() {
        let rates = resolve_texas_state_guard_rates(tables, current_step);
        audit_trace.push(rates.audit_step);
        current_step += 1;

        let months = apportion(&segments, &mut audit_trace, &mut current_step, |segment| {
            calculate_texas_state_guard_month(segment, &rates.rates)
        });
        (DailyRates::TexasStateGuard(rates.rates), months)
    } else {
        if let Some(requested) = input.unrecognized_grade.as_deref() {
            audit_trace.push(record_grade_fallback(requested, current_step));
            current_step += 1;
        }

        let rates = resolve_standard_rates(input, tables, current_step);
        current_step += rates.audit_steps.len() as u32;
        audit_trace.extend(rates.audit_steps);

        let duty = calculate_duty_pay(input, current_step);
        audit_trace.push(duty.audit_step);
        current_step += 1;

        let months = apportion(&segments, &mut audit_trace, &mut current_step, |segment| {
            calculate_standard_month(segment, &rates.rates, &duty.duty_pay)
        });
        (DailyRates::Standard(rates.rates), months)
    };

    let monthly_sum: Decimal = monthly_breakdown.iter().map(|m| m.total).sum();
    let grand_total = round_currency(monthly_sum);
    let total_days = input.total_days();

    audit_trace.push(AuditStep {
        step_number: current_step,
        rule_id: "grand_total".to_string(),
        rule_name: "Grand Total".to_string(),
        input: serde_json::json!({
            "months": monthly_breakdown.len(),
            "monthly_totals": monthly_breakdown
                .iter()
                .map(|m| m.total.to_string())
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "total_days": total_days,
            "grand_total": grand_total.to_string()
        }),
        reasoning: format!(
            "Sum of {} monthly totals over {} days: ${}",
            monthly_breakdown.len(),
            total_days,
            grand_total
        ),
    });

    debug!(
        category = %input.service_category,
        months = monthly_breakdown.len(),
        total_days,
        grand_total = %grand_total,
        "Calculated pay"
    );

    PayResult {
        service_category: input.service_category,
        start_date: input.start_date,
        end_date: input.end_date,
        daily_rates,
        monthly_breakdown,
        total_days,
        grand_total,
        audit_trace,
    }
}

/// Applies a month policy to every segment, recording one audit step each.
fn apportion<F>(
    segments: &[MonthSegment],
    audit_trace: &mut Vec<AuditStep>,
    current_step: &mut u32,
    mut calculate_month: F,
) -> Vec<MonthlyBreakdown>
where
    F: FnMut(&MonthSegment) -> MonthlyBreakdown,
{
    segments
        .iter()
        .map(|segment| {
            let month = calculate_month(segment);

            debug!(
                month = %month.label,
                days = month.days,
                total = %month.total,
                "Apportioned month"
            );

            audit_trace.push(AuditStep {
                step_number: *current_step,
                rule_id: "monthly_apportionment".to_string(),
                rule_name: "Monthly Apportionment".to_string(),
                input: serde_json::json!({
                    "month": month.label,
                    "start_date": month.start_date.to_string(),
                    "end_date": month.end_date.to_string(),
                    "days": month.days
                }),
                output: serde_json::json!({
                    "base_pay": month.base_pay.to_string(),
                    "total": month.total.to_string()
                }),
                reasoning: format!(
                    "{}: {} days from {} to {}, total ${}",
                    month.label, month.days, month.start_date, month.end_date, month.total
                ),
            });
            *current_step += 1;

            month
        })
        .collect()
}
