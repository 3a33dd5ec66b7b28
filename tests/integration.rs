//! Integration tests for the SAD Pay Engine.
//!
//! This test suite drives the HTTP API against the bundled rate tables and
//! covers:
//! - National Guard calculations with and without the minimum income top-up
//! - Flat monthly duty pays
//! - Texas State Guard flat rates
//! - Month apportionment across month, year and leap-day boundaries
//! - Original-versus-corrected comparisons
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use sad_pay_engine::api::{AppState, create_router};
use sad_pay_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let loader = ConfigLoader::load("./config/sad").expect("Failed to load config");
    AppState::new(loader.into_tables())
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_input(category: &str, grade: &str, years: i32, start: &str, end: &str) -> Value {
    json!({
        "service_category": category,
        "grade": grade,
        "years_of_service": years,
        "start_date": start,
        "end_date": end
    })
}

async fn calculate(input: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/calculate", json!({ "input": input })).await
}

fn amount(value: &Value) -> Decimal {
    decimal(value.as_str().expect("amount should be a string"))
}

fn assert_grand_total(result: &Value, expected: &str) {
    assert_eq!(
        amount(&result["result"]["grand_total"]),
        decimal(expected),
        "grand total mismatch"
    );
}

fn month<'a>(result: &'a Value, index: usize) -> &'a Value {
    &result["result"]["monthly_breakdown"][index]
}

fn assert_totals_consistent(result: &Value) {
    let months = result["result"]["monthly_breakdown"].as_array().unwrap();
    let sum: Decimal = months.iter().map(|m| amount(&m["total"])).sum();
    assert_eq!(sum, amount(&result["result"]["grand_total"]));

    let days: i64 = months.iter().map(|m| m["days"].as_i64().unwrap()).sum();
    assert_eq!(days, result["result"]["total_days"].as_i64().unwrap());
}

// =============================================================================
// SECTION 1: National Guard Calculations
// =============================================================================

#[tokio::test]
async fn test_e1_two_months_with_minimum_income_adjustment() {
    // 67.24 + 45.00 + 15.53 + 30.00 = 157.77, topped up by 17.23 to 175.00/day
    let (status, result) = calculate(create_input(
        "army_national_guard",
        "E-1",
        0,
        "2024-01-15",
        "2024-02-10",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["total_days"], 27);

    let january = month(&result, 0);
    assert_eq!(january["label"], "January 2024");
    assert_eq!(january["days"], 17);
    assert_eq!(amount(&january["base_pay"]), decimal("1143.08"));
    assert_eq!(amount(&january["minimum_income_adjustment"]), decimal("292.91"));
    assert_eq!(amount(&january["hazard_pay"]), Decimal::ZERO);
    assert_eq!(amount(&january["total"]), decimal("2975.00"));

    let february = month(&result, 1);
    assert_eq!(february["label"], "February 2024");
    assert_eq!(february["days"], 10);
    assert_eq!(amount(&february["total"]), decimal("1750.00"));

    assert_grand_total(&result, "4725.00");
    assert_totals_consistent(&result);
}

#[tokio::test]
async fn test_e5_above_minimum_has_no_adjustment() {
    // 108.09 + 60.00 + 15.53 + 30.00 = 213.62/day
    let (status, result) = calculate(create_input(
        "army_national_guard",
        "E-5",
        3,
        "2024-03-01",
        "2024-03-31",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let march = month(&result, 0);
    assert_eq!(amount(&march["base_pay"]), decimal("3350.79"));
    assert_eq!(amount(&march["bah"]), decimal("1860.00"));
    assert_eq!(amount(&march["bas"]), decimal("481.43"));
    assert_eq!(amount(&march["per_diem"]), decimal("930.00"));
    assert_eq!(amount(&march["minimum_income_adjustment"]), Decimal::ZERO);
    assert_grand_total(&result, "6622.22");
}

#[tokio::test]
async fn test_o3_officer_with_dependents() {
    // 230.02 + 88.40 + 10.69 + 30.00 = 359.11/day
    let mut input = create_input("air_national_guard", "O-3", 4, "2024-04-01", "2024-04-30");
    input["has_dependents"] = json!(true);

    let (status, result) = calculate(input).await;

    assert_eq!(status, StatusCode::OK);
    let april = month(&result, 0);
    assert_eq!(amount(&april["bah"]), decimal("2652.00"));
    assert_eq!(amount(&april["bas"]), decimal("320.70"));
    assert_grand_total(&result, "10773.30");

    let rates = &result["result"]["daily_rates"];
    assert_eq!(rates["policy"], "standard");
    assert_eq!(amount(&rates["bas_rate"]), decimal("10.69"));
}

#[tokio::test]
async fn test_negative_years_use_first_bracket() {
    // 95.73 + 60.00 + 15.53 + 30.00 = 201.26/day
    let (status, result) = calculate(create_input(
        "army_national_guard",
        "E-5",
        -2,
        "2024-05-01",
        "2024-05-10",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&month(&result, 0)["base_pay"]), decimal("957.30"));
    assert_grand_total(&result, "2012.60");
}

#[tokio::test]
async fn test_grade_is_case_insensitive() {
    let (status, result) = calculate(create_input(
        "Army National Guard",
        "e-1",
        0,
        "2024-03-01",
        "2024-03-31",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_grand_total(&result, "5425.00");
}

#[tokio::test]
async fn test_unknown_grade_paid_at_e1_rates() {
    let (status, result) = calculate(create_input(
        "army_national_guard",
        "E-10",
        0,
        "2024-03-01",
        "2024-03-31",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_grand_total(&result, "5425.00");
    assert_eq!(result["result"]["audit_trace"][0]["rule_id"], "grade_fallback");
    assert_eq!(result["result"]["audit_trace"][0]["input"]["grade"], "E-10");
}

// =============================================================================
// SECTION 2: Duty Pay
// =============================================================================

#[tokio::test]
async fn test_hazard_pay_is_flat_per_month() {
    let mut input = create_input("army_national_guard", "E-1", 0, "2024-01-15", "2024-02-10");
    input["hazardous_duty"] = json!(true);
    input["present_this_month"] = json!(true);

    let (status, result) = calculate(input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&month(&result, 0)["hazard_pay"]), decimal("1000"));
    assert_eq!(amount(&month(&result, 1)["hazard_pay"]), decimal("1000"));
    assert_grand_total(&result, "6725.00");
    assert_totals_consistent(&result);
}

#[tokio::test]
async fn test_border_danger_pay_each_month() {
    let mut input = create_input("air_national_guard", "E-1", 0, "2024-01-15", "2024-02-10");
    input["at_border"] = json!(true);
    input["present_this_month"] = json!(true);

    let (_, result) = calculate(input).await;

    assert_eq!(amount(&month(&result, 0)["danger_pay"]), decimal("225"));
    assert_eq!(amount(&month(&result, 1)["danger_pay"]), decimal("225"));
    assert_grand_total(&result, "5175.00");
}

#[tokio::test]
async fn test_all_duty_pays_stack() {
    let mut input = create_input("army_national_guard", "E-1", 0, "2024-03-01", "2024-03-31");
    input["hazardous_duty"] = json!(true);
    input["hardship_duty"] = json!(true);
    input["at_border"] = json!(true);
    input["present_this_month"] = json!(true);

    let (_, result) = calculate(input).await;

    let march = month(&result, 0);
    assert_eq!(amount(&march["hardship_pay"]), decimal("500"));
    assert_grand_total(&result, "7150.00");
}

#[tokio::test]
async fn test_duty_flag_without_presence_pays_nothing() {
    let mut input = create_input("army_national_guard", "E-1", 0, "2024-03-01", "2024-03-31");
    input["hazardous_duty"] = json!(true);

    let (_, result) = calculate(input).await;

    assert_eq!(amount(&month(&result, 0)["hazard_pay"]), Decimal::ZERO);
    assert_grand_total(&result, "5425.00");
}

#[tokio::test]
async fn test_presence_without_duty_flag_pays_nothing() {
    let mut input = create_input("army_national_guard", "E-1", 0, "2024-03-01", "2024-03-31");
    input["present_this_month"] = json!(true);

    let (_, result) = calculate(input).await;
    assert_grand_total(&result, "5425.00");
}

// =============================================================================
// SECTION 3: Texas State Guard
// =============================================================================

#[tokio::test]
async fn test_texas_state_guard_full_month() {
    let input = json!({
        "service_category": "Texas State Guard",
        "start_date": "2024-03-01",
        "end_date": "2024-03-31"
    });

    let (status, result) = calculate(input).await;

    assert_eq!(status, StatusCode::OK);
    let march = month(&result, 0);
    assert_eq!(amount(&march["base_pay"]), decimal("3751.00"));
    assert_eq!(amount(&march["special_pay"]), decimal("775.00"));
    assert_eq!(amount(&march["allowances"]), decimal("930.00"));
    assert_eq!(amount(&march["bah"]), Decimal::ZERO);
    // Configured total rate, not the component sum of 5456.00
    assert_eq!(amount(&march["total"]), decimal("5580.00"));
    assert_grand_total(&result, "5580.00");
    assert_eq!(result["result"]["daily_rates"]["policy"], "texas_state_guard");
}

#[tokio::test]
async fn test_texas_state_guard_ignores_duty_flags() {
    let input = json!({
        "service_category": "texas_state_guard",
        "grade": "O-6",
        "years_of_service": 25,
        "has_dependents": true,
        "hazardous_duty": true,
        "present_this_month": true,
        "start_date": "2024-06-01",
        "end_date": "2024-06-10"
    });

    let (_, result) = calculate(input).await;

    assert_eq!(amount(&month(&result, 0)["hazard_pay"]), Decimal::ZERO);
    assert_grand_total(&result, "1800.00");
}

// =============================================================================
// SECTION 4: Month Apportionment
// =============================================================================

#[tokio::test]
async fn test_range_across_year_boundary() {
    let (_, result) = calculate(create_input(
        "army_national_guard",
        "E-1",
        0,
        "2023-12-20",
        "2024-01-05",
    ))
    .await;

    assert_eq!(month(&result, 0)["label"], "December 2023");
    assert_eq!(month(&result, 0)["days"], 12);
    assert_eq!(month(&result, 1)["label"], "January 2024");
    assert_eq!(month(&result, 1)["days"], 5);
    assert_grand_total(&result, "2975.00");
    assert_totals_consistent(&result);
}

#[tokio::test]
async fn test_leap_february() {
    let (_, result) = calculate(create_input(
        "army_national_guard",
        "E-1",
        0,
        "2024-02-01",
        "2024-02-29",
    ))
    .await;

    assert_eq!(month(&result, 0)["days"], 29);
    assert_grand_total(&result, "5075.00");
}

#[tokio::test]
async fn test_long_range_totals_are_consistent() {
    let mut input = create_input("air_national_guard", "W-2", 7, "2023-06-17", "2024-09-03");
    input["has_dependents"] = json!(true);
    input["hardship_duty"] = json!(true);
    input["present_this_month"] = json!(true);

    let (status, result) = calculate(input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result["result"]["monthly_breakdown"].as_array().unwrap().len(),
        16
    );
    assert_totals_consistent(&result);
}

#[tokio::test]
async fn test_service_member_is_echoed() {
    let body = json!({
        "input": create_input("army_national_guard", "E-1", 0, "2024-03-01", "2024-03-31"),
        "service_member": {
            "name": "Jordan Smith",
            "dod_id": "1234567890",
            "task_force": "TF-Lonestar",
            "company": "Bravo"
        }
    });

    let (status, result) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["service_member"]["task_force"], "TF-Lonestar");
    assert_grand_total(&result, "5425.00");
}

// =============================================================================
// SECTION 5: Comparison
// =============================================================================

#[tokio::test]
async fn test_compare_missing_hazard_pay_is_underpayment() {
    let original = create_input("army_national_guard", "E-1", 0, "2024-03-01", "2024-03-31");
    let mut corrected = original.clone();
    corrected["hazardous_duty"] = json!(true);
    corrected["present_this_month"] = json!(true);

    let (status, result) = post_json(
        create_router_for_test(),
        "/compare",
        json!({ "original": original, "corrected": corrected }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let comparison = &result["comparison"];
    assert_eq!(amount(&comparison["difference"]), decimal("1000.00"));
    assert_eq!(comparison["status"], "underpayment");

    let march = &comparison["months"][0];
    assert_eq!(march["label"], "March 2024");
    let hazard = march["components"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["component"] == "hazard_pay")
        .unwrap();
    assert_eq!(amount(&hazard["difference"]), decimal("1000"));
}

#[tokio::test]
async fn test_compare_category_change_is_overpayment() {
    let original = json!({
        "service_category": "texas_state_guard",
        "start_date": "2024-03-01",
        "end_date": "2024-03-31"
    });
    let corrected = create_input("army_national_guard", "E-1", 0, "2024-03-01", "2024-03-31");

    let (_, result) = post_json(
        create_router_for_test(),
        "/compare",
        json!({ "original": original, "corrected": corrected }),
    )
    .await;

    assert_eq!(amount(&result["comparison"]["difference"]), decimal("-155.00"));
    assert_eq!(result["comparison"]["status"], "overpayment");
    assert_eq!(
        result["comparison"]["months"][0]["components"]
            .as_array()
            .unwrap()
            .len(),
        10
    );
}

#[tokio::test]
async fn test_compare_shifted_range_unions_months() {
    let original = create_input("army_national_guard", "E-1", 0, "2024-01-15", "2024-02-10");
    let corrected = create_input("army_national_guard", "E-1", 0, "2024-02-01", "2024-03-05");

    let (_, result) = post_json(
        create_router_for_test(),
        "/compare",
        json!({ "original": original, "corrected": corrected }),
    )
    .await;

    let months = result["comparison"]["months"].as_array().unwrap();
    assert_eq!(months.len(), 3);
    assert_eq!(months[0]["label"], "January 2024");
    assert_eq!(months[0]["corrected_days"], 0);
    assert_eq!(months[2]["label"], "March 2024");
    assert_eq!(months[2]["original_days"], 0);
    // 27 days versus 34 days at 175.00
    assert_eq!(amount(&result["comparison"]["difference"]), decimal("1225.00"));
}

#[tokio::test]
async fn test_compare_identical_scenarios() {
    let input = create_input("air_national_guard", "O-2", 3, "2024-07-04", "2024-08-20");

    let (_, result) = post_json(
        create_router_for_test(),
        "/compare",
        json!({ "original": input.clone(), "corrected": input }),
    )
    .await;

    assert_eq!(amount(&result["comparison"]["difference"]), Decimal::ZERO);
    assert_eq!(result["comparison"]["status"], "no_difference");
}

// =============================================================================
// SECTION 6: Error Cases
// =============================================================================

#[tokio::test]
async fn test_missing_grade_for_national_guard() {
    let input = json!({
        "service_category": "army_national_guard",
        "start_date": "2024-03-01",
        "end_date": "2024-03-31"
    });

    let (status, result) = calculate(input).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_missing_end_date() {
    let input = json!({
        "service_category": "texas_state_guard",
        "start_date": "2024-03-01"
    });

    let (status, result) = calculate(input).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_INPUT");
    assert!(result["message"].as_str().unwrap().contains("end_date"));
}

#[tokio::test]
async fn test_end_before_start() {
    let (status, result) = calculate(create_input(
        "army_national_guard",
        "E-1",
        0,
        "2024-03-31",
        "2024-03-01",
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_unknown_service_category() {
    let (status, result) = calculate(create_input(
        "coast_guard",
        "E-1",
        0,
        "2024-03-01",
        "2024-03-31",
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_invalid_date_format() {
    let (status, result) = calculate(create_input(
        "army_national_guard",
        "E-1",
        0,
        "03/01/2024",
        "2024-03-31",
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_input_object() {
    let (status, result) =
        post_json(create_router_for_test(), "/calculate", json!({ "service_member": {} })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}
