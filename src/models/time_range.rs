//! Time range model.
//!
//! This module defines the [`TimeRange`] type: the pair of timezone-aware
//! instants a working-hours calculation runs over.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A validated, timezone-aware time range with `start < end`.
///
/// All calendar-date arithmetic on a range happens in the offset of
/// `start`; the end instant is viewed in that same offset.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::models::TimeRange;
/// use chrono::DateTime;
///
/// let range = TimeRange::new(
///     DateTime::parse_from_rfc3339("2025-10-27T09:00:00Z").unwrap(),
///     DateTime::parse_from_rfc3339("2025-10-31T17:00:00Z").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(range.total_calendar_days(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeRange {
    /// Creates a range, rejecting any range whose end is not strictly after
    /// its start.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> EngineResult<Self> {
        if start >= end {
            return Err(EngineError::InvalidRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// The start instant.
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// The end instant, expressed in the offset of the start instant.
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end.with_timezone(self.start.offset())
    }

    /// The offset all local dates of this range are derived in.
    pub fn offset(&self) -> FixedOffset {
        *self.start.offset()
    }

    /// The local calendar date of the start instant.
    pub fn first_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// The local calendar date of the end instant.
    pub fn last_date(&self) -> NaiveDate {
        self.end().date_naive()
    }

    /// Iterates the local calendar dates touched by the range, inclusive of
    /// both ends.
    pub fn calendar_dates(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_date();
        self.first_date()
            .iter_days()
            .take_while(move |date| *date <= last)
    }

    /// Inclusive day span of the raw range: whole elapsed days plus one.
    ///
    /// Independent of weekends and holidays.
    pub fn total_calendar_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
