//! Comparison models for original-versus-corrected pay.
//!
//! A [`PayComparison`] is built from two [`PayResult`](super::PayResult)s and
//! reports whether the original scenario over- or under-paid.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CalendarMonth, PayComponent};

/// Outcome of comparing an original payment against the corrected amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// The original scenario paid more than the corrected one.
    Overpayment,
    /// The original scenario paid less than the corrected one.
    Underpayment,
    /// Both scenarios pay the same grand total.
    NoDifference,
}

impl PaymentStatus {
    /// Classifies a `corrected - original` difference.
    ///
    /// ```
    /// use sad_pay_engine::models::PaymentStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PaymentStatus::from_difference(Decimal::new(-1, 2)), PaymentStatus::Overpayment);
    /// assert_eq!(PaymentStatus::from_difference(Decimal::ZERO), PaymentStatus::NoDifference);
    /// ```
    pub fn from_difference(difference: Decimal) -> Self {
        if difference < Decimal::ZERO {
            PaymentStatus::Overpayment
        } else if difference > Decimal::ZERO {
            PaymentStatus::Underpayment
        } else {
            PaymentStatus::NoDifference
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Overpayment => write!(f, "overpayment"),
            PaymentStatus::Underpayment => write!(f, "underpayment"),
            PaymentStatus::NoDifference => write!(f, "no difference"),
        }
    }
}

/// Original and corrected amounts for one component of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDifference {
    /// The component being compared.
    pub component: PayComponent,
    /// Amount in the original result (zero if the month was absent).
    pub original: Decimal,
    /// Amount in the corrected result (zero if the month was absent).
    pub corrected: Decimal,
    /// `corrected - original`, rounded to cents.
    pub difference: Decimal,
}

/// Side-by-side comparison of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthComparison {
    /// The calendar month.
    pub month: CalendarMonth,
    /// Display label, e.g. "March 2024".
    pub label: String,
    /// Days of the original range in this month.
    pub original_days: i64,
    /// Days of the corrected range in this month.
    pub corrected_days: i64,
    /// Per-component differences.
    pub components: Vec<ComponentDifference>,
    /// Original month total.
    pub original_total: Decimal,
    /// Corrected month total.
    pub corrected_total: Decimal,
    /// `corrected_total - original_total`, rounded to cents.
    pub total_difference: Decimal,
}

impl MonthComparison {
    /// Returns the difference row for a component, if it was compared.
    pub fn component(&self, component: PayComponent) -> Option<&ComponentDifference> {
        self.components.iter().find(|c| c.component == component)
    }
}

/// The full comparison between two pay results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComparison {
    /// Grand total of the original result.
    pub original_total: Decimal,
    /// Grand total of the corrected result.
    pub corrected_total: Decimal,
    /// `corrected_total - original_total`, rounded to cents.
    pub difference: Decimal,
    /// Classification of `difference`.
    pub status: PaymentStatus,
    /// Month-by-month comparison in chronological order.
    pub months: Vec<MonthComparison>,
}
