//! Calculation logic for the SAD Pay Engine.
//!
//! This module contains the daily rate resolution (base pay brackets, BAH,
//! BAS and the minimum income adjustment), calendar-month apportionment,
//! flat duty pays, the National Guard and Texas State Guard month policies,
//! the [`calculate_pay`] entry point and the original-versus-corrected
//! comparison.

mod comparison;
mod duty_pay;
mod month_segments;
mod pay_calculator;
mod rate_resolver;
mod rounding;
mod standard_pay;
mod texas_state_guard;

pub use comparison::compare_results;
pub use duty_pay::{
    DutyPay, DutyPayResult, HARDSHIP_DUTY_PAY, HAZARDOUS_DUTY_PAY, IMMINENT_DANGER_PAY,
    calculate_duty_pay,
};
pub use month_segments::{MonthSegment, segment_by_month};
pub use pay_calculator::calculate_pay;
pub use rate_resolver::{
    BahRateResult, BaseRateResult, BasRateResult, MinimumIncomeAdjustmentResult, RateSource,
    record_grade_fallback, resolve_bah_rate, resolve_bas_rate, resolve_base_rate,
    resolve_minimum_income_adjustment,
};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use standard_pay::{StandardRatesResult, calculate_standard_month, resolve_standard_rates};
pub use texas_state_guard::{
    TexasStateGuardRatesResult, calculate_texas_state_guard_month,
    resolve_texas_state_guard_rates,
};
