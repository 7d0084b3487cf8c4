//! Request types for the challenges API.
//!
//! This module defines the JSON request bodies and the conversion of the
//! working-hours request into engine parameters.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Code, Color, DayShape, HolidaySet, TimeRange};

/// Formats accepted for a timestamp that carries no offset.
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Request body for the `/workingHoursCalculator` endpoint.
///
/// Hour fields and `deductLunch` fall back to the configured defaults when
/// omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursRequest {
    /// Start of the range, ISO-8601.
    pub start_time: String,
    /// End of the range, ISO-8601.
    pub end_time: String,
    /// Hour the work window opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_start_hour: Option<u32>,
    /// Hour the work window closes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_end_hour: Option<u32>,
    /// Hour the lunch window opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_start_hour: Option<u32>,
    /// Hour the lunch window closes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_end_hour: Option<u32>,
    /// Whether lunch overlap is subtracted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduct_lunch: Option<bool>,
    /// Non-working dates, `YYYY-MM-DD`.
    #[serde(default)]
    pub holidays: Vec<String>,
    /// Whether to return the per-day breakdown.
    #[serde(default)]
    pub include_breakdown: bool,
}

/// Engine parameters parsed from a [`WorkingHoursRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingHoursParams {
    /// The validated range.
    pub range: TimeRange,
    /// The validated day shape.
    pub shape: DayShape,
    /// The parsed holidays.
    pub holidays: HolidaySet,
}

impl WorkingHoursRequest {
    /// Parses and validates the request into engine parameters.
    ///
    /// `defaults` fills omitted hour fields; `max_span_days` caps the
    /// inclusive calendar span of the range.
    pub fn to_params(
        &self,
        defaults: DayShape,
        max_span_days: i64,
    ) -> EngineResult<WorkingHoursParams> {
        let start = parse_timestamp("startTime", &self.start_time)?;
        let end = parse_timestamp("endTime", &self.end_time)?;

        let range = TimeRange::new(start, end).map_err(|_| EngineError::InvalidRange {
            start: self.start_time.clone(),
            end: self.end_time.clone(),
        })?;

        let days = range.total_calendar_days();
        if days > max_span_days {
            return Err(EngineError::SpanTooLarge {
                days,
                max: max_span_days,
            });
        }

        let shape = DayShape::new(
            self.work_start_hour.unwrap_or(defaults.work_start_hour),
            self.work_end_hour.unwrap_or(defaults.work_end_hour),
            self.lunch_start_hour.unwrap_or(defaults.lunch_start_hour),
            self.lunch_end_hour.unwrap_or(defaults.lunch_end_hour),
            self.deduct_lunch.unwrap_or(defaults.deduct_lunch),
        )?;

        let holidays = HolidaySet::parse(&self.holidays)?;

        Ok(WorkingHoursParams {
            range,
            shape,
            holidays,
        })
    }
}

/// Parses an RFC 3339 timestamp; one without an offset is read as UTC.
fn parse_timestamp(field: &str, value: &str) -> EngineResult<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| EngineError::MalformedInput {
            field: field.to_string(),
            message: format!("'{}' is not an ISO-8601 timestamp", value),
        })
}

/// Request body for the `/letterCounter` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterCounterRequest {
    /// Text to count letters in.
    pub input: String,
}

/// Request body for the `/mastermind/guess` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    /// The game being played.
    pub game_id: Uuid,
    /// Color names, one per peg.
    pub guess: Vec<String>,
}

impl GuessRequest {
    /// Parses the color names into a code.
    pub fn code(&self) -> EngineResult<Code> {
        let colors = self
            .guess
            .iter()
            .map(|name| name.parse::<Color>())
            .collect::<EngineResult<Vec<_>>>()?;
        Code::try_from(colors)
    }
}

/// Request body for the `/snarky` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnarkyRequest {
    /// The user's prompt.
    pub input: String,
}
