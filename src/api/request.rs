//! Request types for the SAD Pay Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/compare` endpoints, and the validation that turns a [`PayInputRequest`]
//! into a trusted [`PayInput`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Grade, PayInput, ServiceCategory};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The scenario to calculate.
    pub input: PayInputRequest,
    /// Optional member details, echoed back in the response.
    #[serde(default)]
    pub service_member: Option<ServiceMember>,
}

/// Request body for the `/compare` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// The scenario as originally paid.
    pub original: PayInputRequest,
    /// The scenario as it should have been paid.
    pub corrected: PayInputRequest,
    /// Optional member details, echoed back in the response.
    #[serde(default)]
    pub service_member: Option<ServiceMember>,
}

/// Identifying details for the member being paid.
///
/// None of these fields affect the calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMember {
    /// Member name.
    #[serde(default)]
    pub name: Option<String>,
    /// DoD identification number.
    #[serde(default)]
    pub dod_id: Option<String>,
    /// Task force assignment.
    #[serde(default)]
    pub task_force: Option<String>,
    /// Company assignment.
    #[serde(default)]
    pub company: Option<String>,
}

/// An unvalidated calculation scenario as submitted by a client.
///
/// Dates and grade are optional here so that missing values produce a
/// descriptive validation error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayInputRequest {
    /// The service category.
    pub service_category: ServiceCategory,
    /// Grade code such as "E-4" or "O1E". Required except for the Texas
    /// State Guard.
    #[serde(default)]
    pub grade: Option<String>,
    /// Completed years of service.
    #[serde(default)]
    pub years_of_service: i32,
    /// First day of the range.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the range.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether the member has dependents.
    #[serde(default)]
    pub has_dependents: bool,
    /// Completed 365 days of hazardous duty.
    #[serde(default)]
    pub hazardous_duty: bool,
    /// Eligible for hardship duty pay.
    #[serde(default)]
    pub hardship_duty: bool,
    /// Located at the border.
    #[serde(default)]
    pub at_border: bool,
    /// Present for duty at least one day in the month.
    #[serde(default)]
    pub present_this_month: bool,
}

impl PayInputRequest {
    /// Validates the request and produces a normalized [`PayInput`].
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if a date is missing, or the grade is missing for a
    ///   National Guard category
    ///
    /// A grade code that names no known grade is paid at [`Grade::FALLBACK`]
    /// rates and kept in [`PayInput::unrecognized_grade`].
    /// - `InvalidDateRange` if `end_date` is before `start_date`
    pub fn validate(self) -> EngineResult<PayInput> {
        let start_date = self.start_date.ok_or_else(|| EngineError::InvalidInput {
            field: "start_date".to_string(),
            message: "start date is required".to_string(),
        })?;
        let end_date = self.end_date.ok_or_else(|| EngineError::InvalidInput {
            field: "end_date".to_string(),
            message: "end date is required".to_string(),
        })?;
        if end_date < start_date {
            return Err(EngineError::InvalidDateRange {
                start_date,
                end_date,
            });
        }

        let (grade, unrecognized) =
            match (self.grade.as_deref(), self.service_category.uses_flat_rates()) {
                (Some(code), _) if !code.trim().is_empty() => match code.parse::<Grade>() {
                    Ok(grade) => (grade, None),
                    Err(_) => (Grade::FALLBACK, Some(code.trim().to_string())),
                },
                (_, true) => (Grade::FALLBACK, None),
                (_, false) => {
                    return Err(EngineError::InvalidInput {
                        field: "grade".to_string(),
                        message: format!("grade is required for {}", self.service_category),
                    });
                }
            };

        let mut input = PayInput::new(
            self.service_category,
            grade,
            self.years_of_service,
            start_date,
            end_date,
        );
        if let Some(code) = unrecognized {
            input = input.with_unrecognized_grade(code);
        }

        Ok(input
            .with_dependents(self.has_dependents)
            .with_hazardous_duty(self.hazardous_duty)
            .with_hardship_duty(self.hardship_duty)
            .with_at_border(self.at_border)
            .with_present_this_month(self.present_this_month)
            .normalized())
    }
}

impl TryFrom<PayInputRequest> for PayInput {
    type Error = EngineError;

    fn try_from(req: PayInputRequest) -> Result<Self, Self::Error> {
        req.validate()
    }
}
