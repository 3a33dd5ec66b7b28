//! Military grade and service category types.
//!
//! [`Grade`] covers the fixed, ordered list of pay grades the rate tables are
//! keyed by. [`ServiceCategory`] selects which calculation policy applies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A military pay grade.
///
/// Grades serialize as their table codes (`"E-1"`, `"O1E"`, ...). The
/// declaration order matches the order grades are offered to users.
///
/// # Example
///
/// ```
/// use sad_pay_engine::models::Grade;
///
/// let grade: Grade = "O2E".parse().unwrap();
/// assert_eq!(grade, Grade::O2E);
/// assert!(grade.is_officer_class());
/// assert_eq!(grade.to_string(), "O2E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// Private (E-1).
    #[serde(rename = "E-1")]
    E1,
    /// E-2.
    #[serde(rename = "E-2")]
    E2,
    /// E-3.
    #[serde(rename = "E-3")]
    E3,
    /// E-4.
    #[serde(rename = "E-4")]
    E4,
    /// E-5.
    #[serde(rename = "E-5")]
    E5,
    /// E-6.
    #[serde(rename = "E-6")]
    E6,
    /// E-7.
    #[serde(rename = "E-7")]
    E7,
    /// E-8.
    #[serde(rename = "E-8")]
    E8,
    /// E-9.
    #[serde(rename = "E-9")]
    E9,
    /// Warrant officer W-1.
    #[serde(rename = "W-1")]
    W1,
    /// W-2.
    #[serde(rename = "W-2")]
    W2,
    /// W-3.
    #[serde(rename = "W-3")]
    W3,
    /// W-4.
    #[serde(rename = "W-4")]
    W4,
    /// W-5.
    #[serde(rename = "W-5")]
    W5,
    /// Commissioned officer O-1.
    #[serde(rename = "O-1")]
    O1,
    /// O-1 with over four years of prior enlisted or warrant service.
    #[serde(rename = "O1E")]
    O1E,
    /// O-2.
    #[serde(rename = "O-2")]
    O2,
    /// O-2 with prior enlisted or warrant service.
    #[serde(rename = "O2E")]
    O2E,
    /// O-3.
    #[serde(rename = "O-3")]
    O3,
    /// O-3 with prior enlisted or warrant service.
    #[serde(rename = "O3E")]
    O3E,
    /// O-4.
    #[serde(rename = "O-4")]
    O4,
    /// O-5.
    #[serde(rename = "O-5")]
    O5,
    /// O-6.
    #[serde(rename = "O-6")]
    O6,
}

impl Grade {
    /// Every grade, in the order they are presented for selection.
    pub const ALL: [Grade; 23] = [
        Grade::E1,
        Grade::E2,
        Grade::E3,
        Grade::E4,
        Grade::E5,
        Grade::E6,
        Grade::E7,
        Grade::E8,
        Grade::E9,
        Grade::W1,
        Grade::W2,
        Grade::W3,
        Grade::W4,
        Grade::W5,
        Grade::O1,
        Grade::O1E,
        Grade::O2,
        Grade::O2E,
        Grade::O3,
        Grade::O3E,
        Grade::O4,
        Grade::O5,
        Grade::O6,
    ];

    /// The grade whose rates are used when a grade is missing from a table.
    pub const FALLBACK: Grade = Grade::E1;

    /// Returns the rate-table code for this grade.
    pub fn code(&self) -> &'static str {
        match self {
            Grade::E1 => "E-1",
            Grade::E2 => "E-2",
            Grade::E3 => "E-3",
            Grade::E4 => "E-4",
            Grade::E5 => "E-5",
            Grade::E6 => "E-6",
            Grade::E7 => "E-7",
            Grade::E8 => "E-8",
            Grade::E9 => "E-9",
            Grade::W1 => "W-1",
            Grade::W2 => "W-2",
            Grade::W3 => "W-3",
            Grade::W4 => "W-4",
            Grade::W5 => "W-5",
            Grade::O1 => "O-1",
            Grade::O1E => "O1E",
            Grade::O2 => "O-2",
            Grade::O2E => "O2E",
            Grade::O3 => "O-3",
            Grade::O3E => "O3E",
            Grade::O4 => "O-4",
            Grade::O5 => "O-5",
            Grade::O6 => "O-6",
        }
    }

    /// Returns true for commissioned officer grades, including the
    /// prior-service `O1E`/`O2E`/`O3E` variants.
    ///
    /// Officer-class grades draw the officer BAS rate.
    pub fn is_officer_class(&self) -> bool {
        self.code().starts_with("O-") || matches!(self, Grade::O1E | Grade::O2E | Grade::O3E)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Grade {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Grade::ALL
            .iter()
            .copied()
            .find(|grade| grade.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::InvalidInput {
                field: "grade".to_string(),
                message: format!("unknown grade '{}'", s),
            })
    }
}

/// The service a member is paid under.
///
/// National Guard categories use grade-based rates; the Texas State Guard is
/// paid flat daily rates. Deserialization accepts both the snake_case form
/// and the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// Army National Guard.
    #[serde(alias = "Army National Guard")]
    ArmyNationalGuard,
    /// Air National Guard.
    #[serde(alias = "Air National Guard")]
    AirNationalGuard,
    /// Texas State Guard.
    #[serde(alias = "Texas State Guard")]
    TexasStateGuard,
}

impl ServiceCategory {
    /// Every category, in presentation order.
    pub const ALL: [ServiceCategory; 3] = [
        ServiceCategory::ArmyNationalGuard,
        ServiceCategory::AirNationalGuard,
        ServiceCategory::TexasStateGuard,
    ];

    /// Returns true when grade, years of service and dependents are ignored.
    pub fn uses_flat_rates(&self) -> bool {
        matches!(self, ServiceCategory::TexasStateGuard)
    }

    /// Returns the human-readable category name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::ArmyNationalGuard => "Army National Guard",
            ServiceCategory::AirNationalGuard => "Air National Guard",
            ServiceCategory::TexasStateGuard => "Texas State Guard",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
