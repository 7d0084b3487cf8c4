//! Working-hours calculation.
//!
//! This module walks every local calendar date a [`TimeRange`] touches,
//! clips that day's work window to the range, deducts any lunch overlap and
//! folds the per-day results into a [`WorkSummary`].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayShape, HolidaySet, TimeRange, WorkSummary};

use super::day_detection::{DayType, classify_day};
use super::overlap::{clip, hours_in, overlap};

/// The contribution of one calendar date to a calculation.
///
/// Non-working dates carry zero hours. A date is counted as a working day
/// when its effective interval is nonempty, however short, even if lunch
/// consumes all of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySegment {
    /// The local calendar date.
    pub date: NaiveDate,
    /// How the date was classified.
    pub day_type: DayType,
    /// Length of the effective interval, before lunch.
    #[serde(with = "rust_decimal::serde::float")]
    pub effective_hours: Decimal,
    /// Hours removed for lunch.
    #[serde(with = "rust_decimal::serde::float")]
    pub lunch_hours: Decimal,
    /// Hours credited for the date.
    #[serde(with = "rust_decimal::serde::float")]
    pub worked_hours: Decimal,
    /// Whether the range overlapped the date's work window at all.
    pub working_day: bool,
}

impl DaySegment {
    fn skipped(date: NaiveDate, day_type: DayType) -> Self {
        Self {
            date,
            day_type,
            effective_hours: Decimal::ZERO,
            lunch_hours: Decimal::ZERO,
            worked_hours: Decimal::ZERO,
            working_day: false,
        }
    }

    /// Returns `true` if the date counts towards `working_days`.
    pub fn is_working_day(&self) -> bool {
        self.working_day
    }
}

/// Hours past local midnight beyond which a window boundary is pinned.
const MAX_PLACED_HOUR: u32 = 48;

/// Places a whole hour on a local date in the given offset.
///
/// The hour is added to local midnight, so hour 24 is the next midnight and
/// no value is rejected. Hours past [`MAX_PLACED_HOUR`] are pinned to it, and
/// instants at the edge of the calendar saturate instead of overflowing.
fn at_hour(date: NaiveDate, hour: u32, offset: FixedOffset) -> DateTime<FixedOffset> {
    let hours = TimeDelta::hours(i64::from(hour.min(MAX_PLACED_HOUR)));
    let local = date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(hours)
        .unwrap_or(NaiveDateTime::MAX);
    let utc = local
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
        .unwrap_or(local);
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Computes one date's contribution.
fn segment_for(
    date: NaiveDate,
    range: &TimeRange,
    shape: &DayShape,
    holidays: &HolidaySet,
) -> DaySegment {
    let day_type = classify_day(date, holidays);
    if !day_type.is_working() {
        return DaySegment::skipped(date, day_type);
    }

    let offset = range.offset();
    let work_start = at_hour(date, shape.work_start_hour, offset);
    let work_end = at_hour(date, shape.work_end_hour, offset);

    let Some((effective_start, effective_end)) =
        clip(range.start(), range.end(), work_start, work_end)
    else {
        return DaySegment::skipped(date, day_type);
    };

    let effective_hours = hours_in(effective_end - effective_start);
    let lunch_hours = if shape.deduct_lunch {
        hours_in(overlap(
            effective_start,
            effective_end,
            at_hour(date, shape.lunch_start_hour, offset),
            at_hour(date, shape.lunch_end_hour, offset),
        ))
    } else {
        Decimal::ZERO
    };

    DaySegment {
        date,
        day_type,
        effective_hours,
        lunch_hours,
        worked_hours: effective_hours - lunch_hours,
        working_day: true,
    }
}

/// Iterates the per-date contributions of a range, first date to last.
pub fn day_segments<'a>(
    range: &'a TimeRange,
    shape: &'a DayShape,
    holidays: &'a HolidaySet,
) -> impl Iterator<Item = DaySegment> + 'a {
    range
        .calendar_dates()
        .map(move |date| segment_for(date, range, shape, holidays))
}

/// Returns one [`DaySegment`] for every calendar date the range touches.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::calculation::{calculate_day_breakdown, DayType};
/// use whiteboard_challenges::models::{DayShape, HolidaySet, TimeRange};
/// use chrono::DateTime;
///
/// // Friday 09:00 to Monday 17:00
/// let range = TimeRange::new(
///     DateTime::parse_from_rfc3339("2025-10-24T09:00:00Z").unwrap(),
///     DateTime::parse_from_rfc3339("2025-10-27T17:00:00Z").unwrap(),
/// )
/// .unwrap();
///
/// let days = calculate_day_breakdown(&range, &DayShape::default(), &HolidaySet::new());
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[1].day_type, DayType::Weekend);
/// ```
pub fn calculate_day_breakdown(
    range: &TimeRange,
    shape: &DayShape,
    holidays: &HolidaySet,
) -> Vec<DaySegment> {
    day_segments(range, shape, holidays).collect()
}

/// Computes billable hours, working days and lunch deductions for a range.
///
/// Pure and total: any combination of inputs yields a summary, including
/// the all-zero summary when the range contains no working time.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::calculation::calculate_working_hours;
/// use whiteboard_challenges::models::{DayShape, HolidaySet, TimeRange};
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let range = TimeRange::new(
///     DateTime::parse_from_rfc3339("2025-10-27T09:00:00Z").unwrap(),
///     DateTime::parse_from_rfc3339("2025-10-31T17:00:00Z").unwrap(),
/// )
/// .unwrap();
/// let shape = DayShape::new(9, 17, 12, 13, true).unwrap();
/// let holidays = HolidaySet::parse(["2025-10-29"]).unwrap();
///
/// let summary = calculate_working_hours(&range, &shape, &holidays);
/// assert_eq!(summary.working_days, 4);
/// assert_eq!(summary.total_hours, Decimal::from(28));
/// assert_eq!(summary.lunch_hours_deducted, Decimal::from(4));
/// assert_eq!(summary.total_calendar_days, 5);
/// ```
pub fn calculate_working_hours(
    range: &TimeRange,
    shape: &DayShape,
    holidays: &HolidaySet,
) -> WorkSummary {
    let mut summary = day_segments(range, shape, holidays)
        .filter(DaySegment::is_working_day)
        .fold(WorkSummary::default(), |mut acc, day| {
            acc.working_days += 1;
            acc.total_hours += day.worked_hours;
            acc.lunch_hours_deducted += day.lunch_hours;
            acc
        });
    summary.total_calendar_days = range.total_calendar_days();
    summary
}
