//! Calendar-month apportionment of a date range.
//!
//! This module splits an inclusive date range into one segment per calendar
//! month it touches.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::CalendarMonth;

/// The part of a date range that falls within one calendar month.
///
/// # Example
///
/// ```
/// use sad_pay_engine::calculation::segment_by_month;
/// use chrono::NaiveDate;
///
/// let segments = segment_by_month(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
/// );
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].days, 17);
/// assert_eq!(segments[1].days, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSegment {
    /// The calendar month.
    pub month: CalendarMonth,
    /// First day of the range inside the month.
    pub start_date: NaiveDate,
    /// Last day of the range inside the month.
    pub end_date: NaiveDate,
    /// Inclusive day count.
    pub days: i64,
}

/// Splits `[start, end]` at calendar-month boundaries.
///
/// The cursor starts at `start` and jumps to the first day of the following
/// month after each segment, so every month is visited exactly once. Segments
/// are chronological and their day counts sum to the inclusive length of the
/// range. An inverted range yields no segments.
pub fn segment_by_month(start: NaiveDate, end: NaiveDate) -> Vec<MonthSegment> {
    let mut segments = Vec::new();
    let mut cursor = start;

    while cursor <= end {
        let first_of_month = cursor.with_day(1).unwrap_or(cursor);
        let next_month = first_of_month.checked_add_months(Months::new(1));
        let last_of_month = next_month
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX);

        let segment_end = end.min(last_of_month);
        segments.push(MonthSegment {
            month: CalendarMonth {
                year: cursor.year(),
                month: cursor.month(),
            },
            start_date: cursor,
            end_date: segment_end,
            days: (segment_end - cursor).num_days() + 1,
        });

        match next_month {
            Some(next) => cursor = next,
            None => break,
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day() {
        let segments = segment_by_month(date(2024, 3, 15), date(2024, 3, 15));
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].days, 1);
        assert_eq!(segments[0].start_date, segments[0].end_date);
    }

    #[test]
    fn test_range_within_one_month() {
        let segments = segment_by_month(date(2024, 3, 1), date(2024, 3, 31));
        assert_eq!(segments.len(), 1);
        assert_eq!(
            segments[0].month,
            CalendarMonth {
                year: 2024,
                month: 3
            }
        );
        assert_eq!(segments[0].days, 31);
    }

    #[test]
    fn test_range_spanning_two_months() {
        let segments = segment_by_month(date(2024, 1, 15), date(2024, 2, 10));
        assert_eq!(segments.len(), 2);

        assert_eq!(segments[0].start_date, date(2024, 1, 15));
        assert_eq!(segments[0].end_date, date(2024, 1, 31));
        assert_eq!(segments[0].days, 17);

        assert_eq!(segments[1].start_date, date(2024, 2, 1));
        assert_eq!(segments[1].end_date, date(2024, 2, 10));
        assert_eq!(segments[1].days, 10);
    }

    #[test]
    fn test_leap_february_has_29_days() {
        let segments = segment_by_month(date(2024, 2, 1), date(2024, 3, 1));
        assert_eq!(segments[0].days, 29);
        assert_eq!(segments[1].days, 1);

        let segments = segment_by_month(date(2023, 2, 1), date(2023, 2, 28));
        assert_eq!(segments[0].days, 28);
    }

    #[test]
    fn test_range_crossing_year_boundary() {
        let segments = segment_by_month(date(2023, 12, 20), date(2024, 1, 5));
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].month.label(), "December 2023");
        assert_eq!(segments[0].days, 12);
        assert_eq!(segments[1].month.label(), "January 2024");
        assert_eq!(segments[1].days, 5);
    }

    #[test]
    fn test_same_month_in_consecutive_years_is_visited_twice() {
        let segments = segment_by_month(date(2023, 6, 1), date(2024, 6, 30));
        assert_eq!(segments.len(), 13);
        assert_eq!(segments[0].month.year, 2023);
        assert_eq!(segments[12].month.year, 2024);
        assert_eq!(segments[0].month.month, segments[12].month.month);
    }

    #[test]
    fn test_days_sum_to_range_length() {
        let start = date(2023, 11, 17);
        let end = date(2024, 4, 3);
        let total: i64 = segment_by_month(start, end).iter().map(|s| s.days).sum();
        assert_eq!(total, (end - start).num_days() + 1);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert!(segment_by_month(date(2024, 3, 10), date(2024, 3, 1)).is_empty());
    }
}
