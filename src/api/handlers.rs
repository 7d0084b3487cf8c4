//! HTTP request handlers for the challenges API.
//!
//! This module contains the handler functions for all API endpoints and the
//! router that wires them together.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_day_breakdown, calculate_working_hours, count_letters};
use crate::models::Color;

use super::request::{GuessRequest, LetterCounterRequest, SnarkyRequest, WorkingHoursRequest};
use super::response::{
    ApiError, ApiErrorResponse, GuessResponse, LetterCounterResponse, MastermindStartResponse,
    SnarkyPromptResponse, SnarkyResponse, WorkingHoursResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(hello_handler))
        .route(
            "/workingHoursCalculator",
            post(working_hours_handler).fallback(method_not_allowed),
        )
        .route(
            "/letterCounter",
            post(letter_counter_handler).fallback(method_not_allowed),
        )
        .route("/mastermind", get(mastermind_start_handler))
        .route(
            "/mastermind/guess",
            post(mastermind_guess_handler).fallback(method_not_allowed),
        )
        .route("/snarky/prompt", get(snarky_prompt_handler))
        .route("/snarky", post(snarky_handler).fallback(method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body or turns the rejection into a 400 error.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the bad field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_input(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error))
}

/// Answers any method other than POST on a POST-only route.
async fn method_not_allowed() -> impl IntoResponse {
    ApiErrorResponse::new(StatusCode::METHOD_NOT_ALLOWED, ApiError::method_not_allowed())
}

/// Handler for GET /api.
async fn hello_handler() -> impl IntoResponse {
    json_ok(json!({ "message": "Hello from the challenges API!" }))
}

/// Handler for POST /workingHoursCalculator.
///
/// Parses the range, day shape and holidays, then returns the working-hours
/// summary and, on request, the per-day breakdown.
async fn working_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingHoursRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working hours request");

    let request = parse_body(payload, correlation_id)?;

    let config = state.config();
    let params = request
        .to_params(config.default_day_shape(), config.max_span_days())
        .map_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Working hours request rejected"
            );
            ApiErrorResponse::from(err)
        })?;

    let start_time = Instant::now();
    let summary = calculate_working_hours(&params.range, &params.shape, &params.holidays);
    let breakdown = request
        .include_breakdown
        .then(|| calculate_day_breakdown(&params.range, &params.shape, &params.holidays));

    info!(
        correlation_id = %correlation_id,
        working_hours = %summary.total_hours,
        working_days = summary.working_days,
        total_days = summary.total_calendar_days,
        duration_us = start_time.elapsed().as_micros(),
        "Working hours calculated"
    );

    let mut response = WorkingHoursResponse::new(request.start_time, request.end_time, summary);
    if let Some(breakdown) = breakdown {
        response = response.with_breakdown(breakdown);
    }
    Ok(json_ok(response))
}

/// Handler for POST /letterCounter.
async fn letter_counter_handler(
    payload: Result<Json<LetterCounterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload, correlation_id)?;

    let counts = count_letters(&request.input);
    debug!(
        correlation_id = %correlation_id,
        distinct_letters = counts.len(),
        "Letters counted"
    );

    Ok(json_ok(LetterCounterResponse {
        input: request.input,
        counts,
    }))
}

/// Handler for GET /mastermind.
///
/// Starts a new game and hands back its id. The secret is never logged.
async fn mastermind_start_handler(State(state): State<AppState>) -> impl IntoResponse {
    let game_id = state.games().start().await;
    info!(game_id = %game_id, "Mastermind game started");

    json_ok(MastermindStartResponse {
        challenge: "Mastermind".to_string(),
        colors: Color::ALL.to_vec(),
        message: "New game started. Make a guess!".to_string(),
        game_id,
    })
}

/// Handler for POST /mastermind/guess.
async fn mastermind_guess_handler(
    State(state): State<AppState>,
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload, correlation_id)?;

    let outcome = match request.code() {
        Ok(code) => state.games().guess(request.game_id, &code).await,
        Err(err) => Err(err),
    };
    let outcome = outcome.map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            game_id = %request.game_id,
            error = %err,
            "Guess rejected"
        );
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        game_id = %request.game_id,
        hits = outcome.score.hits,
        blows = outcome.score.blows,
        attempts = outcome.attempts,
        solved = outcome.solved,
        "Guess scored"
    );
    Ok(json_ok(GuessResponse::from(outcome)))
}

/// Handler for GET /snarky/prompt.
async fn snarky_prompt_handler(State(state): State<AppState>) -> impl IntoResponse {
    json_ok(SnarkyPromptResponse {
        prompt: state.responder().opening_prompt(),
    })
}

/// Handler for POST /snarky.
async fn snarky_handler(
    State(state): State<AppState>,
    payload: Result<Json<SnarkyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload, correlation_id)?;

    let response = state.responder().respond(&request.input);
    debug!(
        correlation_id = %correlation_id,
        input_chars = request.input.chars().count(),
        "Snarky reply produced"
    );

    Ok(json_ok(SnarkyResponse { response }))
}
