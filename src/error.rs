//! Error types for the SAD Pay Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself never fails for well-typed input; errors come
//! from loading reference data and from validating requests at the API edge.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the SAD Pay Engine.
///
/// # Example
///
/// ```
/// use sad_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pay_grades.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pay_grades.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table is absent or lacks the entries every calculation relies on.
    #[error("Missing reference data in '{table}': {message}")]
    MissingReferenceData {
        /// The rate table that is incomplete.
        table: String,
        /// What is missing.
        message: String,
    },

    /// The requested date range ends before it starts.
    #[error("Invalid date range: end date {end_date} is before start date {start_date}")]
    InvalidDateRange {
        /// The requested start date.
        start_date: NaiveDate,
        /// The requested end date.
        end_date: NaiveDate,
    },

    /// A request field was missing or unusable.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_missing_reference_data_displays_table() {
        let error = EngineError::MissingReferenceData {
            table: "pay_grades".to_string(),
            message: "no E-1 fallback table".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing reference data in 'pay_grades': no E-1 fallback table"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            start_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: end date 2024-01-15 is before start date 2024-02-10"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "start_date".to_string(),
            message: "is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'start_date': is required"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_data() -> EngineResult<()> {
            Err(EngineError::MissingReferenceData {
                table: "bah_rates".to_string(),
                message: "empty".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_data()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
