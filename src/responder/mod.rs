//! Chat responders.
//!
//! A [`Responder`] turns a user prompt into a reply. Implementations run in
//! process; prompts are never handed to a shell or an interpreter.

mod sanitize;
mod snarky;

pub use sanitize::sanitize;
pub use snarky::{DEFAULT_MAX_INPUT_CHARS, LONG_QUESTION_CHARS, SnarkyResponder};

/// Produces replies to chat prompts.
pub trait Responder: Send + Sync {
    /// A greeting shown before the first prompt.
    fn opening_prompt(&self) -> String;

    /// Replies to one prompt.
    fn respond(&self, prompt: &str) -> String;
}
