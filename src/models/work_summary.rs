//! Working-hours result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate result of a working-hours calculation.
///
/// Hours are exact decimals internally and JSON numbers on the wire.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::models::WorkSummary;
///
/// let summary = WorkSummary::default();
/// assert!(summary.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSummary {
    /// Billable hours after any lunch deduction.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
    /// Inclusive day span of the raw range, weekends and holidays included.
    pub total_calendar_days: i64,
    /// Days with nonzero overlap between the range and the work window.
    pub working_days: u32,
    /// Hours removed for lunch across all working days.
    #[serde(with = "rust_decimal::serde::float")]
    pub lunch_hours_deducted: Decimal,
}

impl WorkSummary {
    /// Returns `true` when the range contained no working time.
    pub fn is_empty(&self) -> bool {
        self.working_days == 0 && self.total_hours.is_zero()
    }
}
