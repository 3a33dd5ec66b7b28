//! Core data models for the SAD Pay Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod comparison;
mod grade;
mod pay_input;
mod pay_result;

pub use comparison::{ComponentDifference, MonthComparison, PayComparison, PaymentStatus};
pub use grade::{Grade, ServiceCategory};
pub use pay_input::PayInput;
pub use pay_result::{
    AuditStep, CalendarMonth, DailyRates, MonthlyBreakdown, PayComponent, PayResult,
    StandardDailyRates, TexasStateGuardDailyRates,
};
