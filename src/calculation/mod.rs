//! Calculation logic for the challenges service.
//!
//! This module contains the pure functions behind every endpoint: the
//! working-hours engine with its interval overlap helper and day
//! classification predicate, letter frequency counting, and Mastermind
//! guess scoring.

mod day_detection;
mod letter_count;
mod mastermind;
mod overlap;
mod working_hours;

pub use day_detection::{DayType, classify_day, is_working_day};
pub use letter_count::{LetterCounts, count_letters};
pub use mastermind::score_guess;
pub use overlap::{clip, hours_in, overlap};
pub use working_hours::{
    DaySegment, calculate_day_breakdown, calculate_working_hours, day_segments,
};
