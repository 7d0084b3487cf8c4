//! Core data models for the challenges service.
//!
//! This module contains the request-scoped value objects the calculations
//! run on, plus the Mastermind game records.

mod day_shape;
mod mastermind;
mod time_range;
mod work_summary;

pub use day_shape::{DayShape, HolidaySet, MAX_HOUR};
pub use mastermind::{CODE_LENGTH, Code, Color, Game, Score};
pub use time_range::TimeRange;
pub use work_summary::WorkSummary;
