//! Day classification logic.
//!
//! This module decides whether a calendar date is a working day for the
//! purposes of the working-hours calculation: weekends and listed holidays
//! are skipped before any interval math.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidaySet;

/// Classification of a calendar date.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::calculation::DayType;
///
/// let day_type = DayType::Holiday;
/// assert_eq!(format!("{:?}", day_type), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday and not a listed holiday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
    /// A weekday that appears in the holiday list.
    Holiday,
}

impl DayType {
    /// Returns `true` if work hours can be counted on this day.
    pub fn is_working(&self) -> bool {
        matches!(self, DayType::Weekday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Classifies a local calendar date.
///
/// Weekends win over holidays, so a holiday that lands on a Saturday is
/// reported as [`DayType::Weekend`].
///
/// # Example
///
/// ```
/// use whiteboard_challenges::calculation::{classify_day, DayType};
/// use whiteboard_challenges::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::parse(["2025-10-29"]).unwrap();
///
/// // 2025-10-27 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2025, 10, 27).unwrap();
/// assert_eq!(classify_day(monday, &holidays), DayType::Weekday);
///
/// // 2025-10-25 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2025, 10, 25).unwrap();
/// assert_eq!(classify_day(saturday, &holidays), DayType::Weekend);
///
/// let wednesday = NaiveDate::from_ymd_opt(2025, 10, 29).unwrap();
/// assert_eq!(classify_day(wednesday, &holidays), DayType::Holiday);
/// ```
pub fn classify_day(date: NaiveDate, holidays: &HolidaySet) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ if holidays.contains(date) => DayType::Holiday,
        _ => DayType::Weekday,
    }
}

/// Returns `true` for a weekday that is not a listed holiday.
pub fn is_working_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    classify_day(date, holidays).is_working()
}
