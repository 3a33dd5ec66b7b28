//! Flat monthly duty pays.
//!
//! Hazardous duty, hardship duty and imminent danger pay are flat monthly
//! amounts. They are not prorated by days: every month the range touches
//! receives the full amount once the member is present for duty.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, PayInput};

/// Monthly hazardous duty pay.
pub const HAZARDOUS_DUTY_PAY: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Monthly hardship duty pay.
pub const HARDSHIP_DUTY_PAY: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Monthly imminent danger pay for members at the border.
pub const IMMINENT_DANGER_PAY: Decimal = Decimal::from_parts(225, 0, 0, false, 0);

/// The flat duty pays owed for each month of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DutyPay {
    /// Hazardous duty pay.
    pub hazard_pay: Decimal,
    /// Hardship duty pay.
    pub hardship_pay: Decimal,
    /// Imminent danger pay.
    pub danger_pay: Decimal,
}

impl DutyPay {
    /// Sum of the three duty pays.
    pub fn total(&self) -> Decimal {
        self.hazard_pay + self.hardship_pay + self.danger_pay
    }
}

/// The result of determining duty pay, including the audit step.
#[derive(Debug, Clone)]
pub struct DutyPayResult {
    /// The monthly duty pays.
    pub duty_pay: DutyPay,
    /// The audit step recording this determination.
    pub audit_step: AuditStep,
}

/// Determines the flat monthly duty pays for an input.
///
/// Each pay requires its own flag plus presence for duty. Presence only
/// counts while at least one duty flag is set.
///
/// # Examples
///
/// ```
/// use sad_pay_engine::calculation::{HAZARDOUS_DUTY_PAY, calculate_duty_pay};
/// use sad_pay_engine::models::{Grade, PayInput, ServiceCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let input = PayInput::new(ServiceCategory::ArmyNationalGuard, Grade::E4, 2, date, date)
///     .with_hazardous_duty(true)
///     .with_present_this_month(true);
///
/// let result = calculate_duty_pay(&input, 1);
/// assert_eq!(result.duty_pay.hazard_pay, HAZARDOUS_DUTY_PAY);
/// assert_eq!(result.duty_pay.danger_pay, Decimal::ZERO);
/// ```
pub fn calculate_duty_pay(input: &PayInput, step_number: u32) -> DutyPayResult {
    let present = input.present_for_duty();
    let pay_if = |eligible: bool, amount: Decimal| {
        if eligible && present {
            amount
        } else {
            Decimal::ZERO
        }
    };

    let duty_pay = DutyPay {
        hazard_pay: pay_if(input.hazardous_duty, HAZARDOUS_DUTY_PAY),
        hardship_pay: pay_if(input.hardship_duty, HARDSHIP_DUTY_PAY),
        danger_pay: pay_if(input.at_border, IMMINENT_DANGER_PAY),
    };

    let reasoning = if !present {
        "Not present for special duty; no duty pay".to_string()
    } else {
        let mut paid = Vec::new();
        if duty_pay.hazard_pay > Decimal::ZERO {
            paid.push(format!("hazardous duty ${}", duty_pay.hazard_pay));
        }
        if duty_pay.hardship_pay > Decimal::ZERO {
            paid.push(format!("hardship duty ${}", duty_pay.hardship_pay));
        }
        if duty_pay.danger_pay > Decimal::ZERO {
            paid.push(format!("imminent danger ${}", duty_pay.danger_pay));
        }
        format!("Present for duty; paid per month: {}", paid.join(", "))
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "duty_pay".to_string(),
        rule_name: "Special Duty Pay".to_string(),
        input: serde_json::json!({
            "hazardous_duty": input.hazardous_duty,
            "hardship_duty": input.hardship_duty,
            "at_border": input.at_border,
            "present_this_month": input.present_this_month,
            "present_for_duty": present
        }),
        output: serde_json::json!({
            "hazard_pay": duty_pay.hazard_pay.to_string(),
            "hardship_pay": duty_pay.hardship_pay.to_string(),
            "danger_pay": duty_pay.danger_pay.to_string()
        }),
        reasoning,
    };

    DutyPayResult {
        duty_pay,
        audit_step,
    }
}
