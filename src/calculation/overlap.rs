//! Interval overlap arithmetic.
//!
//! Both the clip of a day's work window to the requested range and the
//! lunch deduction use the same closed-interval intersection rule:
//! `overlap([a1,a2],[b1,b2]) = max(0, min(a2,b2) - max(a1,b1))`.

use std::ops::Sub;

use chrono::TimeDelta;
use rust_decimal::Decimal;

const SECONDS_PER_HOUR: i64 = 3600;

/// Decimal scale of a nanosecond count expressed in seconds.
const NANOS_SCALE: u32 = 9;

/// Intersects `[a_start, a_end]` with `[b_start, b_end]`.
///
/// Returns `None` when the intersection is empty or a single instant, so a
/// range that only touches a window never produces a segment.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::calculation::clip;
///
/// assert_eq!(clip(8, 10, 9, 17), Some((9, 10)));
/// assert_eq!(clip(17, 18, 9, 17), None);
/// ```
pub fn clip<T: Ord + Copy>(a_start: T, a_end: T, b_start: T, b_end: T) -> Option<(T, T)> {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    (start < end).then_some((start, end))
}

/// Duration shared by `[a_start, a_end]` and `[b_start, b_end]`.
///
/// Never negative; zero whenever the intervals don't intersect.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::calculation::overlap;
/// use chrono::{NaiveDateTime, TimeDelta};
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let lunch = overlap(
///     at("2025-10-27 09:00"), at("2025-10-27 17:00"),
///     at("2025-10-27 12:00"), at("2025-10-27 13:00"),
/// );
/// assert_eq!(lunch, TimeDelta::hours(1));
/// ```
pub fn overlap<T>(a_start: T, a_end: T, b_start: T, b_end: T) -> TimeDelta
where
    T: Ord + Copy + Sub<T, Output = TimeDelta>,
{
    clip(a_start, a_end, b_start, b_end)
        .map(|(start, end)| end - start)
        .unwrap_or(TimeDelta::zero())
}

/// Converts a duration to fractional hours, to the nanosecond.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::calculation::hours_in;
/// use chrono::TimeDelta;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_in(TimeDelta::minutes(90)), Decimal::new(15, 1));
/// ```
pub fn hours_in(duration: TimeDelta) -> Decimal {
    let seconds = Decimal::from(duration.num_seconds())
        + Decimal::new(i64::from(duration.subsec_nanos()), NANOS_SCALE);
    seconds / Decimal::from(SECONDS_PER_HOUR)
}
