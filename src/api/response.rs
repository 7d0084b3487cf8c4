//! Response types for the challenges API.
//!
//! This module defines the success bodies of every endpoint, the error
//! response structure, and the mapping from [`EngineError`] to HTTP status.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{DaySegment, LetterCounts};
use crate::error::EngineError;
use crate::models::{Color, WorkSummary};
use crate::store::GuessOutcome;

/// Response body of the `/workingHoursCalculator` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursResponse {
    /// The start timestamp as received.
    pub start_time: String,
    /// The end timestamp as received.
    pub end_time: String,
    /// Billable hours after lunch deduction.
    #[serde(with = "rust_decimal::serde::float")]
    pub working_hours: Decimal,
    /// Inclusive calendar-day span of the range.
    pub total_days: i64,
    /// Days with working time.
    pub working_days: u32,
    /// Hours deducted for lunch.
    #[serde(with = "rust_decimal::serde::float")]
    pub lunch_deducted: Decimal,
    /// Per-day contributions, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<DaySegment>>,
}

impl WorkingHoursResponse {
    /// Builds the response from a summary and the raw request timestamps.
    pub fn new(start_time: String, end_time: String, summary: WorkSummary) -> Self {
        Self {
            start_time,
            end_time,
            working_hours: summary.total_hours,
            total_days: summary.total_calendar_days,
            working_days: summary.working_days,
            lunch_deducted: summary.lunch_hours_deducted,
            breakdown: None,
        }
    }

    /// Attaches the per-day breakdown.
    pub fn with_breakdown(mut self, breakdown: Vec<DaySegment>) -> Self {
        self.breakdown = Some(breakdown);
        self
    }
}

/// Response body of the `/letterCounter` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCounterResponse {
    /// The text as received.
    pub input: String,
    /// Count per lowercase letter; absent letters are omitted.
    pub counts: LetterCounts,
}

/// Response body of `GET /mastermind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MastermindStartResponse {
    /// What the player is asked to do.
    pub challenge: String,
    /// The palette the secret is drawn from.
    pub colors: Vec<Color>,
    /// Rules of the game.
    pub message: String,
    /// Id to send back with every guess.
    pub game_id: Uuid,
}

/// Response body of `POST /mastermind/guess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResponse {
    /// Right color, right position.
    pub hits: u32,
    /// Right color, wrong position.
    pub blows: u32,
    /// Guesses so far in this game.
    pub attempts: u32,
    /// Whether the game is solved.
    pub solved: bool,
}

impl From<GuessOutcome> for GuessResponse {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            hits: outcome.score.hits,
            blows: outcome.score.blows,
            attempts: outcome.attempts,
            solved: outcome.solved,
        }
    }
}

/// Response body of `GET /snarky/prompt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnarkyPromptResponse {
    /// The opening line.
    pub prompt: String,
}

/// Response body of `POST /snarky`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnarkyResponse {
    /// The reply.
    pub response: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a malformed input error response.
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_INPUT", message)
    }

    /// Creates the error returned for a disallowed HTTP method.
    pub fn method_not_allowed() -> Self {
        Self::new("METHOD_NOT_ALLOWED", "Only POST method is allowed")
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            EngineError::ConfigParseError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            EngineError::MalformedInput { field, .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "MALFORMED_INPUT",
                    message,
                    format!("Check the '{}' field", field),
                ),
            ),
            EngineError::InvalidRange { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_RANGE", message),
            ),
            EngineError::InvalidDayShape { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_DAY_SHAPE", message),
            ),
            EngineError::SpanTooLarge { max, .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "SPAN_TOO_LARGE",
                    message,
                    format!("Split the range into pieces of at most {} days", max),
                ),
            ),
            EngineError::InvalidGuess { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_GUESS", message),
            ),
            EngineError::GameNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "GAME_NOT_FOUND",
                    message,
                    "Start a new game with GET /mastermind",
                ),
            ),
        }
    }
}
