//! Error types for the challenges service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the request layer can reject. The working-hours
//! engine itself never fails; these errors are raised while turning wire
//! input into engine parameters, while playing Mastermind, or while loading
//! configuration.

use thiserror::Error;

/// The main error type for the challenges service.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A request field could not be parsed.
    #[error("Malformed input in '{field}': {message}")]
    MalformedInput {
        /// The request field that failed to parse.
        field: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// The end of a time range is not strictly after its start.
    #[error("Invalid range: end {end} must be after start {start}")]
    InvalidRange {
        /// The start of the rejected range, as received.
        start: String,
        /// The end of the rejected range, as received.
        end: String,
    },

    /// The work or lunch window is inconsistent.
    #[error("Invalid day shape: {message}")]
    InvalidDayShape {
        /// A description of the inconsistency.
        message: String,
    },

    /// The requested range spans more calendar days than the service allows.
    #[error("Range spans {days} days, more than the allowed {max}")]
    SpanTooLarge {
        /// The inclusive calendar-day span of the request.
        days: i64,
        /// The configured maximum.
        max: i64,
    },

    /// A Mastermind guess was not a valid code.
    #[error("Invalid guess: {message}")]
    InvalidGuess {
        /// A description of what made the guess invalid.
        message: String,
    },

    /// No Mastermind game exists with the given id.
    #[error("Game not found: {id}")]
    GameNotFound {
        /// The game id that was not found.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
