//! Pay input model.
//!
//! This module defines the [`PayInput`] record describing one service profile
//! over one date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Grade, ServiceCategory};

/// A validated request for a single pay calculation.
///
/// The calculator trusts this record: `end_date >= start_date` is the caller's
/// responsibility. `grade`, `years_of_service` and `has_dependents` are ignored
/// for the Texas State Guard.
///
/// # Example
///
/// ```
/// use sad_pay_engine::models::{Grade, PayInput, ServiceCategory};
/// use chrono::NaiveDate;
///
/// let input = PayInput::new(
///     ServiceCategory::ArmyNationalGuard,
///     Grade::E4,
///     3,
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
/// )
/// .with_hazardous_duty(true)
/// .with_present_this_month(true);
///
/// assert!(input.present_for_duty());
/// assert_eq!(input.total_days(), 27);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInput {
    /// The service the member is paid under.
    pub service_category: ServiceCategory,
    /// The member's pay grade.
    pub grade: Grade,
    /// Completed years of service.
    pub years_of_service: i32,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Whether BAH is paid at the with-dependents rate.
    #[serde(default)]
    pub has_dependents: bool,
    /// Completed 365 days of hazardous duty.
    #[serde(default)]
    pub hazardous_duty: bool,
    /// Eligible for hardship duty pay.
    #[serde(default)]
    pub hardship_duty: bool,
    /// Located at the border (imminent danger pay).
    #[serde(default)]
    pub at_border: bool,
    /// Present for duty at least one day in the month.
    #[serde(default)]
    pub present_this_month: bool,
    /// The submitted grade code when it named no known grade. `grade` then
    /// holds [`Grade::FALLBACK`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unrecognized_grade: Option<String>,
}

impl PayInput {
    /// Creates an input with every duty flag cleared and no dependents.
    pub fn new(
        service_category: ServiceCategory,
        grade: Grade,
        years_of_service: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            service_category,
            grade,
            years_of_service,
            start_date,
            end_date,
            has_dependents: false,
            hazardous_duty: false,
            hardship_duty: false,
            at_border: false,
            present_this_month: false,
            unrecognized_grade: None,
        }
    }

    /// Sets the dependents flag.
    pub fn with_dependents(mut self, has_dependents: bool) -> Self {
        self.has_dependents = has_dependents;
        self
    }

    /// Sets the hazardous duty flag.
    pub fn with_hazardous_duty(mut self, hazardous_duty: bool) -> Self {
        self.hazardous_duty = hazardous_duty;
        self
    }

    /// Sets the hardship duty flag.
    pub fn with_hardship_duty(mut self, hardship_duty: bool) -> Self {
        self.hardship_duty = hardship_duty;
        self
    }

    /// Sets the border flag.
    pub fn with_at_border(mut self, at_border: bool) -> Self {
        self.at_border = at_border;
        self
    }

    /// Sets the presence flag. It only takes effect while a duty flag is set.
    pub fn with_present_this_month(mut self, present_this_month: bool) -> Self {
        self.present_this_month = present_this_month;
        self
    }

    /// Pays an unrecognized grade code at [`Grade::FALLBACK`] rates and keeps
    /// the code for the audit trace.
    pub fn with_unrecognized_grade(mut self, code: impl Into<String>) -> Self {
        self.grade = Grade::FALLBACK;
        self.unrecognized_grade = Some(code.into());
        self
    }

    /// Returns true if any special duty flag is set.
    pub fn has_special_duty(&self) -> bool {
        self.hazardous_duty || self.hardship_duty || self.at_border
    }

    /// The effective presence flag: `present_this_month` is forced false
    /// unless a special duty flag is set.
    pub fn present_for_duty(&self) -> bool {
        self.present_this_month && self.has_special_duty()
    }

    /// Returns a copy with `present_this_month` normalized to
    /// [`present_for_duty`](Self::present_for_duty).
    ///
    /// ```
    /// use sad_pay_engine::models::{Grade, PayInput, ServiceCategory};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let input = PayInput::new(ServiceCategory::AirNationalGuard, Grade::E1, 0, date, date)
    ///     .with_present_this_month(true)
    ///     .normalized();
    /// assert!(!input.present_this_month);
    /// ```
    pub fn normalized(mut self) -> Self {
        self.present_this_month = self.present_for_duty();
        self
    }

    /// Inclusive day count of the range. Non-positive for an inverted range.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
