//! HTTP API module for the challenges service.
//!
//! This module provides the REST endpoints for the working-hours
//! calculator, the letter counter, Mastermind and the snarky chatbot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    GuessRequest, LetterCounterRequest, SnarkyRequest, WorkingHoursParams, WorkingHoursRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, GuessResponse, LetterCounterResponse, MastermindStartResponse,
    SnarkyPromptResponse, SnarkyResponse, WorkingHoursResponse,
};
pub use state::AppState;
