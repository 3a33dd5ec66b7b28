//! Original-versus-corrected comparison.
//!
//! This module diffs two independent [`PayResult`]s month by month to find
//! over- or under-payment.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    CalendarMonth, ComponentDifference, MonthComparison, MonthlyBreakdown, PayComparison,
    PayComponent, PayResult, PaymentStatus,
};

use super::rounding::round_currency;

/// Compares an original calculation against a corrected one.
///
/// Differences are `corrected - original`, so a negative grand difference is
/// an overpayment. Months are the union of both results' months in
/// chronological order; a month missing from one side counts as zero. The
/// components compared are those relevant to either result's category.
///
/// # Examples
///
/// ```
/// use sad_pay_engine::calculation::{calculate_pay, compare_results};
/// use sad_pay_engine::config::ConfigLoader;
/// use sad_pay_engine::models::{Grade, PayInput, PaymentStatus, ServiceCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let tables = ConfigLoader::load("./config/sad").unwrap().into_tables();
/// let original = PayInput::new(
///     ServiceCategory::ArmyNationalGuard,
///     Grade::E1,
///     0,
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// );
/// let corrected = original
///     .clone()
///     .with_hazardous_duty(true)
///     .with_present_this_month(true);
///
/// let comparison = compare_results(
///     &calculate_pay(&original, &tables),
///     &calculate_pay(&corrected, &tables),
/// );
/// assert_eq!(comparison.status, PaymentStatus::Underpayment);
/// assert_eq!(comparison.difference, Decimal::new(100000, 2));
/// ```
pub fn compare_results(original: &PayResult, corrected: &PayResult) -> PayComparison {
    let original_components = PayComponent::for_category(original.service_category);
    let corrected_components = PayComponent::for_category(corrected.service_category);
    let components: Vec<PayComponent> = PayComponent::ALL
        .into_iter()
        .filter(|c| original_components.contains(c) || corrected_components.contains(c))
        .collect();

    let mut by_month: BTreeMap<CalendarMonth, (Option<&MonthlyBreakdown>, Option<&MonthlyBreakdown>)> =
        BTreeMap::new();
    for month in &original.monthly_breakdown {
        by_month.entry(month.month).or_default().0 = Some(month);
    }
    for month in &corrected.monthly_breakdown {
        by_month.entry(month.month).or_default().1 = Some(month);
    }

    let months: Vec<MonthComparison> = by_month
        .into_iter()
        .map(|(month, (before, after))| compare_month(month, before, after, &components))
        .collect();

    let difference = round_currency(corrected.grand_total - original.grand_total);
    let status = PaymentStatus::from_difference(difference);

    debug!(
        original_total = %original.grand_total,
        corrected_total = %corrected.grand_total,
        difference = %difference,
        status = %status,
        months = months.len(),
        "Compared pay results"
    );

    PayComparison {
        original_total: original.grand_total,
        corrected_total: corrected.grand_total,
        difference,
        status,
        months,
    }
}

fn compare_month(
    month: CalendarMonth,
    original: Option<&MonthlyBreakdown>,
    corrected: Option<&MonthlyBreakdown>,
    components: &[PayComponent],
) -> MonthComparison {
    let amount = |side: Option<&MonthlyBreakdown>, component: PayComponent| {
        side.map(|m| m.amount(component)).unwrap_or(Decimal::ZERO)
    };

    let components = components
        .iter()
        .map(|&component| {
            let before = amount(original, component);
            let after = amount(corrected, component);
            ComponentDifference {
                component,
                original: before,
                corrected: after,
                difference: round_currency(after - before),
            }
        })
        .collect();

    let original_total = original.map(|m| m.total).unwrap_or(Decimal::ZERO);
    let corrected_total = corrected.map(|m| m.total).unwrap_or(Decimal::ZERO);

    MonthComparison {
        month,
        label: month.label(),
        original_days: original.map(|m| m.days).unwrap_or(0),
        corrected_days: corrected.map(|m| m.days).unwrap_or(0),
        components,
        original_total,
        corrected_total,
        total_difference: round_currency(corrected_total - original_total),
    }
}
