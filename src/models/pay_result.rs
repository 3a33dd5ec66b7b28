//! Pay result models for the SAD Pay Engine.
//!
//! This module contains the [`PayResult`] type and its associated structures
//! that capture all outputs from a pay calculation: the daily rate snapshot,
//! the chronological monthly breakdown, totals, and an audit trace.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ServiceCategory;

/// A calendar month instance, ordered chronologically.
///
/// Used as the key for monthly breakdowns so ordering never depends on the
/// display label.
///
/// # Example
///
/// ```
/// use sad_pay_engine::models::CalendarMonth;
///
/// let december = CalendarMonth { year: 2023, month: 12 };
/// let january = CalendarMonth { year: 2024, month: 1 };
/// assert!(december < january);
/// assert_eq!(january.label(), "January 2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// The calendar year.
    pub year: i32,
    /// The month number, 1 through 12.
    pub month: u32,
}

impl CalendarMonth {
    /// The "Month Year" display label, e.g. "February 2024".
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One monetary component of a monthly breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayComponent {
    /// Basic pay.
    BasePay,
    /// Basic Allowance for Housing.
    Bah,
    /// Basic Allowance for Subsistence.
    Bas,
    /// Flat daily per diem.
    PerDiem,
    /// Top-up to the minimum daily income.
    MinimumIncomeAdjustment,
    /// Hazardous duty pay (flat, per month).
    HazardPay,
    /// Hardship duty pay (flat, per month).
    HardshipPay,
    /// Imminent danger pay at the border (flat, per month).
    DangerPay,
    /// Texas State Guard special pay.
    SpecialPay,
    /// Texas State Guard daily allowances.
    Allowances,
}

impl PayComponent {
    /// Every component in reporting order.
    pub const ALL: [PayComponent; 10] = [
        PayComponent::BasePay,
        PayComponent::Bah,
        PayComponent::Bas,
        PayComponent::PerDiem,
        PayComponent::MinimumIncomeAdjustment,
        PayComponent::HazardPay,
        PayComponent::HardshipPay,
        PayComponent::DangerPay,
        PayComponent::SpecialPay,
        PayComponent::Allowances,
    ];

    /// Components paid under the National Guard policy.
    pub const STANDARD: [PayComponent; 8] = [
        PayComponent::BasePay,
        PayComponent::Bah,
        PayComponent::Bas,
        PayComponent::PerDiem,
        PayComponent::MinimumIncomeAdjustment,
        PayComponent::HazardPay,
        PayComponent::HardshipPay,
        PayComponent::DangerPay,
    ];

    /// Components paid under the Texas State Guard policy.
    pub const TEXAS_STATE_GUARD: [PayComponent; 3] = [
        PayComponent::BasePay,
        PayComponent::SpecialPay,
        PayComponent::Allowances,
    ];

    /// Returns the components relevant to a service category.
    pub fn for_category(category: ServiceCategory) -> &'static [PayComponent] {
        if category.uses_flat_rates() {
            &Self::TEXAS_STATE_GUARD
        } else {
            &Self::STANDARD
        }
    }

    /// Human-readable component name.
    pub fn label(&self) -> &'static str {
        match self {
            PayComponent::BasePay => "Base Pay",
            PayComponent::Bah => "BAH",
            PayComponent::Bas => "BAS",
            PayComponent::PerDiem => "Per Diem",
            PayComponent::MinimumIncomeAdjustment => "Min Income Adjustment",
            PayComponent::HazardPay => "Hazard Pay",
            PayComponent::HardshipPay => "Hardship Pay",
            PayComponent::DangerPay => "Danger Pay",
            PayComponent::SpecialPay => "Special Pay",
            PayComponent::Allowances => "Allowances",
        }
    }
}

/// Pay for the part of the range that falls in one calendar month.
///
/// Every amount is rounded to cents. Components that do not apply to the
/// calculation's service category are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    /// The calendar month this entry covers.
    pub month: CalendarMonth,
    /// Display label, e.g. "January 2024".
    pub label: String,
    /// First day of the range inside this month.
    pub start_date: NaiveDate,
    /// Last day of the range inside this month.
    pub end_date: NaiveDate,
    /// Inclusive number of days of the range inside this month.
    pub days: i64,
    /// Basic pay.
    pub base_pay: Decimal,
    /// Basic Allowance for Housing.
    pub bah: Decimal,
    /// Basic Allowance for Subsistence.
    pub bas: Decimal,
    /// Per diem.
    pub per_diem: Decimal,
    /// Minimum income adjustment.
    pub minimum_income_adjustment: Decimal,
    /// Hazardous duty pay.
    pub hazard_pay: Decimal,
    /// Hardship duty pay.
    pub hardship_pay: Decimal,
    /// Imminent danger pay.
    pub danger_pay: Decimal,
    /// Texas State Guard special pay.
    pub special_pay: Decimal,
    /// Texas State Guard allowances.
    pub allowances: Decimal,
    /// The month's total.
    pub total: Decimal,
}

impl MonthlyBreakdown {
    /// Returns the amount recorded for a component.
    pub fn amount(&self, component: PayComponent) -> Decimal {
        match component {
            PayComponent::BasePay => self.base_pay,
            PayComponent::Bah => self.bah,
            PayComponent::Bas => self.bas,
            PayComponent::PerDiem => self.per_diem,
            PayComponent::MinimumIncomeAdjustment => self.minimum_income_adjustment,
            PayComponent::HazardPay => self.hazard_pay,
            PayComponent::HardshipPay => self.hardship_pay,
            PayComponent::DangerPay => self.danger_pay,
            PayComponent::SpecialPay => self.special_pay,
            PayComponent::Allowances => self.allowances,
        }
    }
}

/// Daily rates resolved for a National Guard calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardDailyRates {
    /// Daily basic pay for the grade and years-of-service bracket.
    pub base_rate: Decimal,
    /// Daily BAH, rounded to cents.
    pub bah_rate: Decimal,
    /// Daily BAS, rounded to cents.
    pub bas_rate: Decimal,
    /// Daily per diem.
    pub per_diem_rate: Decimal,
    /// Daily top-up to reach the minimum daily rate (zero when not needed).
    pub minimum_income_adjustment: Decimal,
}

/// Flat daily rates for a Texas State Guard calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TexasStateGuardDailyRates {
    /// Daily base pay.
    pub base_rate: Decimal,
    /// Daily special pay.
    pub special_pay_rate: Decimal,
    /// Daily allowance.
    pub allowance_rate: Decimal,
    /// Configured daily total, independent of the three rates above.
    pub total_rate: Decimal,
}

/// Snapshot of the daily rates a calculation used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DailyRates {
    /// Grade-based National Guard rates.
    Standard(StandardDailyRates),
    /// Flat Texas State Guard rates.
    TexasStateGuard(TexasStateGuardDailyRates),
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a pay calculation.
///
/// Contains no timestamps or identifiers, so calculating the same input twice
/// yields equal results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// The service category the calculation used.
    pub service_category: ServiceCategory,
    /// First day of the range.
    pub start_date: NaiveDate,
    /// Last day of the range.
    pub end_date: NaiveDate,
    /// The daily rates applied.
    pub daily_rates: DailyRates,
    /// Monthly breakdown in chronological order.
    pub monthly_breakdown: Vec<MonthlyBreakdown>,
    /// Inclusive day count of the range.
    pub total_days: i64,
    /// Rounded sum of the monthly totals.
    pub grand_total: Decimal,
    /// Ordered record of every rule applied.
    pub audit_trace: Vec<AuditStep>,
}

impl PayResult {
    /// Looks up the breakdown for a calendar month.
    pub fn month(&self, month: CalendarMonth) -> Option<&MonthlyBreakdown> {
        self.monthly_breakdown.iter().find(|m| m.month == month)
    }
}
