//! Integration tests for the challenges service.
//!
//! This test suite drives every endpoint through the router:
//! - Working hours across weekdays, weekends, holidays and offsets
//! - Lunch deduction
//! - Request validation and error codes
//! - Mastermind games
//! - Letter counter
//! - Snarky responder

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use whiteboard_challenges::api::{AppState, create_router};
use whiteboard_challenges::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/challenges.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

async fn post_working_hours(router: Router, body: Value) -> (StatusCode, Value) {
    post(router, "/workingHoursCalculator", body).await
}

fn assert_hours(result: &Value, field: &str, expected: f64) {
    let actual = result[field].as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Working Hours
// =============================================================================

#[tokio::test]
async fn test_full_week_with_holiday_and_lunch() {
    // Mon 2025-10-27 09:00 to Fri 2025-10-31 17:00, Wednesday off, lunch deducted
    // Expected: 4 days * (8h - 1h lunch) = 28h
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-27T09:00:00Z",
        "endTime": "2025-10-31T17:00:00Z",
        "workStartHour": 9,
        "workEndHour": 17,
        "lunchStartHour": 12,
        "lunchEndHour": 13,
        "deductLunch": true,
        "holidays": ["2025-10-29"]
    });

    let (status, result) = post_working_hours(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["startTime"], "2025-10-27T09:00:00Z");
    assert_eq!(result["endTime"], "2025-10-31T17:00:00Z");
    assert_hours(&result, "workingHours", 28.0);
    assert_hours(&result, "lunchDeducted", 4.0);
    assert_eq!(result["workingDays"], 4);
    assert_eq!(result["totalDays"], 5);
    assert!(result.get("breakdown").is_none());
}

#[tokio::test]
async fn test_single_day_without_lunch() {
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-27T09:00:00Z",
        "endTime": "2025-10-27T17:00:00Z"
    });

    let (status, result) = post_working_hours(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_hours(&result, "workingHours", 8.0);
    assert_hours(&result, "lunchDeducted", 0.0);
    assert_eq!(result["workingDays"], 1);
    assert_eq!(result["totalDays"], 1);
}

#[tokio::test]
async fn test_range_overlapping_end_of_day() {
    // 16:00 to 18:00 against a 9 to 17 window
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-27T16:00:00Z",
        "endTime": "2025-10-27T18:00:00Z"
    });

    let (_, result) = post_working_hours(router, request).await;

    assert_hours(&result, "workingHours", 1.0);
    assert_eq!(result["workingDays"], 1);
}

#[tokio::test]
async fn test_range_after_hours_is_zero() {
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-27T18:00:00Z",
        "endTime": "2025-10-27T19:00:00Z"
    });

    let (status, result) = post_working_hours(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_hours(&result, "workingHours", 0.0);
    assert_eq!(result["workingDays"], 0);
    assert_eq!(result["totalDays"], 1);
}

#[tokio::test]
async fn test_weekend_only_range_is_zero() {
    // Saturday 2025-10-25 through Sunday 2025-10-26
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-25T00:00:00Z",
        "endTime": "2025-10-26T23:00:00Z"
    });

    let (_, result) = post_working_hours(router, request).await;

    assert_hours(&result, "workingHours", 0.0);
    assert_eq!(result["workingDays"], 0);
    assert_eq!(result["totalDays"], 2);
}

#[tokio::test]
async fn test_holiday_only_range_is_zero() {
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-12-25T08:00:00Z",
        "endTime": "2025-12-25T18:00:00Z",
        "holidays": ["2025-12-25"]
    });

    let (_, result) = post_working_hours(router, request).await;

    assert_hours(&result, "workingHours", 0.0);
    assert_eq!(result["workingDays"], 0);
}

#[tokio::test]
async fn test_partial_lunch_overlap() {
    // 12:30 to 15:00 with lunch 12 to 13: 2.5h effective, 0.5h lunch
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-28T12:30:00Z",
        "endTime": "2025-10-28T15:00:00Z",
        "deductLunch": true
    });

    let (_, result) = post_working_hours(router, request).await;

    assert_hours(&result, "workingHours", 2.0);
    assert_hours(&result, "lunchDeducted", 0.5);
    assert_eq!(result["workingDays"], 1);
}

#[tokio::test]
async fn test_offset_is_honoured() {
    // 09:00 to 17:00 in +10:00 is a full local day
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-27T09:00:00+10:00",
        "endTime": "2025-10-27T17:00:00+10:00"
    });

    let (_, result) = post_working_hours(router, request).await;

    assert_hours(&result, "workingHours", 8.0);
    assert_eq!(result["workingDays"], 1);
}

#[tokio::test]
async fn test_timestamp_without_offset_is_accepted() {
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-27T09:00:00",
        "endTime": "2025-10-27T13:00:00"
    });

    let (status, result) = post_working_hours(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_hours(&result, "workingHours", 4.0);
}

#[tokio::test]
async fn test_fractional_seconds_count_a_working_day() {
    // 0.9 s inside the work window still makes Monday a working day
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-27T09:00:00.900Z",
        "endTime": "2025-10-27T09:00:01.800Z"
    });

    let (status, result) = post_working_hours(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["workingDays"], 1);
    assert_hours(&result, "workingHours", 0.9 / 3600.0);
}

#[tokio::test]
async fn test_custom_work_window() {
    // 07:00 to 15:00 window, range covers the whole day
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-27T00:00:00Z",
        "endTime": "2025-10-27T23:00:00Z",
        "workStartHour": 7,
        "workEndHour": 15
    });

    let (_, result) = post_working_hours(router, request).await;

    assert_hours(&result, "workingHours", 8.0);
}

#[tokio::test]
async fn test_breakdown_lists_every_date() {
    let router = create_router_for_test();
    let request = json!({
        "startTime": "2025-10-27T09:00:00Z",
        "endTime": "2025-10-31T17:00:00Z",
        "deductLunch": true,
        "holidays": ["2025-10-29"],
        "includeBreakdown": true
    });

    let (_, result) = post_working_hours(router, request).await;

    let breakdown = result["breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 5);
    assert_eq!(breakdown[0]["date"], "2025-10-27");
    assert_eq!(breakdown[0]["dayType"], "weekday");
    assert_eq!(breakdown[0]["workedHours"], 7.0);
    assert_eq!(breakdown[0]["workingDay"], true);
    assert_eq!(breakdown[2]["workingDay"], false);
    assert_eq!(breakdown[2]["dayType"], "holiday");
    assert_eq!(breakdown[2]["workedHours"], 0.0);
}

#[tokio::test]
async fn test_identical_requests_give_identical_results() {
    let request = json!({
        "startTime": "2025-10-20T10:15:00Z",
        "endTime": "2025-11-03T11:45:00Z",
        "deductLunch": true
    });

    let (_, first) = post_working_hours(create_router_for_test(), request.clone()).await;
    let (_, second) = post_working_hours(create_router_for_test(), request).await;

    assert_eq!(first, second);
}

// =============================================================================
// SECTION 2: Working Hours Validation
// =============================================================================

#[tokio::test]
async fn test_get_is_method_not_allowed() {
    let (status, result) = get(create_router_for_test(), "/workingHoursCalculator").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(result["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(result["message"], "Only POST method is allowed");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/workingHoursCalculator")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"startTime\": "))
        .unwrap();

    let (status, result) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_bad_timestamp_is_rejected() {
    let request = json!({
        "startTime": "27/10/2025 09:00",
        "endTime": "2025-10-27T17:00:00Z"
    });

    let (status, result) = post_working_hours(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_INPUT");
    assert!(result["message"].as_str().unwrap().contains("startTime"));
}

#[tokio::test]
async fn test_inverted_range_is_rejected() {
    let request = json!({
        "startTime": "2025-10-27T17:00:00Z",
        "endTime": "2025-10-27T09:00:00Z"
    });

    let (status, result) = post_working_hours(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RANGE");
}

#[tokio::test]
async fn test_bad_holiday_is_rejected() {
    let request = json!({
        "startTime": "2025-10-27T09:00:00Z",
        "endTime": "2025-10-27T17:00:00Z",
        "holidays": ["2025-02-30"]
    });

    let (status, result) = post_working_hours(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_INPUT");
}

#[tokio::test]
async fn test_inverted_work_window_is_rejected() {
    let request = json!({
        "startTime": "2025-10-27T09:00:00Z",
        "endTime": "2025-10-27T17:00:00Z",
        "workStartHour": 17,
        "workEndHour": 9
    });

    let (status, result) = post_working_hours(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DAY_SHAPE");
}

#[tokio::test]
async fn test_oversized_span_is_rejected() {
    let config = ConfigLoader::from_yaml_str("working_hours:\n  max_span_days: 7\n", "inline")
        .unwrap();
    let router = create_router(AppState::new(config));
    let request = json!({
        "startTime": "2025-10-01T09:00:00Z",
        "endTime": "2025-10-31T17:00:00Z"
    });

    let (status, result) = post_working_hours(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "SPAN_TOO_LARGE");
}

#[tokio::test]
async fn test_configured_defaults_apply() {
    let config = ConfigLoader::from_yaml_str("working_hours:\n  deduct_lunch: true\n", "inline")
        .unwrap();
    let router = create_router(AppState::new(config));
    let request = json!({
        "startTime": "2025-10-27T09:00:00Z",
        "endTime": "2025-10-27T17:00:00Z"
    });

    let (_, result) = post_working_hours(router, request).await;

    assert_hours(&result, "workingHours", 7.0);
    assert_hours(&result, "lunchDeducted", 1.0);
}

// =============================================================================
// SECTION 3: Mastermind
// =============================================================================

#[tokio::test]
async fn test_mastermind_game_flow() {
    let router = create_router_for_test();

    let (status, game) = get(router.clone(), "/mastermind").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(game["challenge"], "Mastermind");
    assert_eq!(
        game["colors"],
        json!(["red", "yellow", "blue", "green", "orange", "purple"])
    );
    let game_id = game["gameId"].as_str().unwrap().to_string();

    let (status, score) = post(
        router.clone(),
        "/mastermind/guess",
        json!({ "gameId": game_id, "guess": ["red", "yellow", "blue", "green"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let hits = score["hits"].as_u64().unwrap();
    let blows = score["blows"].as_u64().unwrap();
    assert!(hits + blows <= 4);
    assert_eq!(score["attempts"], 1);
    assert_eq!(score["solved"], hits == 4);

    let (_, score) = post(
        router,
        "/mastermind/guess",
        json!({ "gameId": game_id, "guess": ["red", "red", "red", "red"] }),
    )
    .await;
    assert_eq!(score["attempts"], 2);
}

#[tokio::test]
async fn test_each_game_has_its_own_id() {
    let router = create_router_for_test();
    let (_, first) = get(router.clone(), "/mastermind").await;
    let (_, second) = get(router, "/mastermind").await;

    assert_ne!(first["gameId"], second["gameId"]);
}

#[tokio::test]
async fn test_short_guess_is_rejected() {
    let router = create_router_for_test();
    let (_, game) = get(router.clone(), "/mastermind").await;

    let (status, result) = post(
        router,
        "/mastermind/guess",
        json!({ "gameId": game["gameId"], "guess": ["red", "blue"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_GUESS");
}

#[tokio::test]
async fn test_guess_requires_post() {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/mastermind/guess")
        .body(Body::empty())
        .unwrap();

    let (status, result) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(result["code"], "METHOD_NOT_ALLOWED");
}

// =============================================================================
// SECTION 4: Letter Counter
// =============================================================================

#[tokio::test]
async fn test_letter_counter_ignores_case_and_symbols() {
    let (status, result) = post(
        create_router_for_test(),
        "/letterCounter",
        json!({ "input": "AaB b-1!" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["input"], "AaB b-1!");
    assert_eq!(result["counts"], json!({ "a": 2, "b": 2 }));
}

#[tokio::test]
async fn test_letter_counter_empty_input() {
    let (_, result) = post(
        create_router_for_test(),
        "/letterCounter",
        json!({ "input": "" }),
    )
    .await;

    assert_eq!(result["counts"], json!({}));
}

// =============================================================================
// SECTION 5: Snarky Responder
// =============================================================================

#[tokio::test]
async fn test_snarky_replies() {
    let (status, result) = post(
        create_router_for_test(),
        "/snarky",
        json!({ "input": "Will it rain tomorrow?" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!result["response"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_snarky_empty_input() {
    let (_, result) = post(
        create_router_for_test(),
        "/snarky",
        json!({ "input": "   " }),
    )
    .await;

    assert_eq!(
        result["response"],
        "You typed nothing. Is that a metaphor for the usefulness of your mind?"
    );
}

#[tokio::test]
async fn test_snarky_repeat_is_noticed_across_requests() {
    let router = create_router_for_test();
    let body = json!({ "input": "Why is the sky blue?" });

    let (_, first) = post(router.clone(), "/snarky", body.clone()).await;
    let (_, second) = post(router, "/snarky", body).await;

    assert_ne!(first["response"], Value::Null);
    let second = second["response"].as_str().unwrap();
    assert!(
        [
            "Two times? Are you trying to set a world record for being annoying?",
            "Wow, deja vu. Try again, but with a different question this time.",
            "Did you just copy-paste that? I have no motivation to answer a lazy question.",
        ]
        .contains(&second),
        "Unexpected reply to a repeat: {}",
        second
    );
}

#[tokio::test]
async fn test_snarky_markup_is_not_echoed() {
    let (_, result) = post(
        create_router_for_test(),
        "/snarky",
        json!({ "input": "<script>alert('x')</script>" }),
    )
    .await;

    let reply = result["response"].as_str().unwrap();
    assert!(!reply.contains("<script>"));
}

#[tokio::test]
async fn test_hello_endpoint() {
    let (status, result) = get(create_router_for_test(), "/api").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["message"], "Hello from the challenges API!");
}
