//! Day shape and holiday models.
//!
//! A [`DayShape`] describes the daily work window and the optional lunch
//! window; a [`HolidaySet`] is the allow-list of non-working calendar dates.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The highest hour of day accepted for any window boundary.
pub const MAX_HOUR: u32 = 23;

/// The daily work window and lunch window, in whole hours of the local day.
///
/// Fields are public so any value can reach the engine, which is total over
/// all of them. [`DayShape::new`] applies the request-layer rules: every hour
/// in `0..=23`, `work_start_hour < work_end_hour`, and a non-inverted lunch
/// window when lunch is deducted. A lunch window outside the work window is
/// allowed and simply never overlaps.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::models::DayShape;
///
/// let shape = DayShape::new(9, 17, 12, 13, true).unwrap();
/// assert_eq!((shape.work_start_hour, shape.work_end_hour), (9, 17));
/// assert!(DayShape::new(17, 9, 12, 13, false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayShape {
    /// Hour the work window opens.
    pub work_start_hour: u32,
    /// Hour the work window closes.
    pub work_end_hour: u32,
    /// Hour the lunch window opens.
    pub lunch_start_hour: u32,
    /// Hour the lunch window closes.
    pub lunch_end_hour: u32,
    /// Whether lunch overlap is subtracted from worked hours.
    pub deduct_lunch: bool,
}

impl DayShape {
    /// Creates a validated day shape.
    pub fn new(
        work_start_hour: u32,
        work_end_hour: u32,
        lunch_start_hour: u32,
        lunch_end_hour: u32,
        deduct_lunch: bool,
    ) -> EngineResult<Self> {
        let shape = Self {
            work_start_hour,
            work_end_hour,
            lunch_start_hour,
            lunch_end_hour,
            deduct_lunch,
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Checks the request-layer rules on an existing shape.
    pub fn validate(&self) -> EngineResult<()> {
        let hours = [
            ("workStartHour", self.work_start_hour),
            ("workEndHour", self.work_end_hour),
            ("lunchStartHour", self.lunch_start_hour),
            ("lunchEndHour", self.lunch_end_hour),
        ];
        if let Some((name, value)) = hours.iter().find(|(_, value)| *value > MAX_HOUR) {
            return Err(EngineError::InvalidDayShape {
                message: format!("{} must be between 0 and {}, got {}", name, MAX_HOUR, value),
            });
        }

        if self.work_start_hour >= self.work_end_hour {
            return Err(EngineError::InvalidDayShape {
                message: format!(
                    "workStartHour ({}) must be before workEndHour ({})",
                    self.work_start_hour, self.work_end_hour
                ),
            });
        }

        if self.deduct_lunch && self.lunch_start_hour > self.lunch_end_hour {
            return Err(EngineError::InvalidDayShape {
                message: format!(
                    "lunchStartHour ({}) must not be after lunchEndHour ({})",
                    self.lunch_start_hour, self.lunch_end_hour
                ),
            });
        }

        Ok(())
    }
}

impl Default for DayShape {
    /// 9 to 17 with a 12 to 13 lunch window, lunch not deducted.
    fn default() -> Self {
        Self {
            work_start_hour: 9,
            work_end_hour: 17,
            lunch_start_hour: 12,
            lunch_end_hour: 13,
            deduct_lunch: false,
        }
    }
}

/// An explicit allow-list of holiday dates.
///
/// Matching is by calendar date only.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::parse(["2025-10-29"]).unwrap();
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2025, 10, 29).unwrap()));
/// assert!(HolidaySet::parse(["29/10/2025"]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses ISO calendar dates (`YYYY-MM-DD`).
    pub fn parse<I, S>(dates: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        dates
            .into_iter()
            .map(|raw| {
                let raw = raw.as_ref();
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                    EngineError::MalformedInput {
                        field: "holidays".to_string(),
                        message: format!("invalid date '{}': {}", raw, e),
                    }
                })
            })
            .collect()
    }

    /// Returns `true` if `date` is a listed holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if no holidays are listed.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
