//! Configuration types for the challenges service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field has a default, so a partial file only overrides what it names.

use serde::Deserialize;

use crate::models::DayShape;

/// Default cap on concurrently held Mastermind games.
pub const DEFAULT_MAX_ACTIVE_GAMES: usize = 1000;

/// Default cap on the inclusive calendar span of a working-hours request.
pub const DEFAULT_MAX_SPAN_DAYS: i64 = 3660;

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listening address.
    pub server: ServerConfig,
    /// Working-hours calculator defaults and limits.
    pub working_hours: WorkingHoursConfig,
    /// Mastermind game limits.
    pub mastermind: MastermindConfig,
    /// Chat responder limits.
    pub responder: ResponderConfig,
}

/// Address the HTTP server binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host or IP address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Defaults applied to omitted working-hours request fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkingHoursConfig {
    /// Hour the work window opens.
    pub work_start_hour: u32,
    /// Hour the work window closes.
    pub work_end_hour: u32,
    /// Hour the lunch window opens.
    pub lunch_start_hour: u32,
    /// Hour the lunch window closes.
    pub lunch_end_hour: u32,
    /// Whether lunch is deducted when the request does not say.
    pub deduct_lunch: bool,
    /// Largest inclusive calendar span a request may cover.
    pub max_span_days: i64,
}

impl WorkingHoursConfig {
    /// The day shape requests start from before their own overrides.
    ///
    /// Not validated here; the loader validates it once at startup.
    pub fn default_shape(&self) -> DayShape {
        DayShape {
            work_start_hour: self.work_start_hour,
            work_end_hour: self.work_end_hour,
            lunch_start_hour: self.lunch_start_hour,
            lunch_end_hour: self.lunch_end_hour,
            deduct_lunch: self.deduct_lunch,
        }
    }
}

impl Default for WorkingHoursConfig {
    fn default() -> Self {
        let shape = DayShape::default();
        Self {
            work_start_hour: shape.work_start_hour,
            work_end_hour: shape.work_end_hour,
            lunch_start_hour: shape.lunch_start_hour,
            lunch_end_hour: shape.lunch_end_hour,
            deduct_lunch: shape.deduct_lunch,
            max_span_days: DEFAULT_MAX_SPAN_DAYS,
        }
    }
}

/// Mastermind limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MastermindConfig {
    /// Games held at once before the oldest is evicted.
    pub max_active_games: usize,
}

impl Default for MastermindConfig {
    fn default() -> Self {
        Self {
            max_active_games: DEFAULT_MAX_ACTIVE_GAMES,
        }
    }
}

/// Chat responder limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Prompts longer than this are refused.
    pub max_input_chars: usize,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            max_input_chars: crate::responder::DEFAULT_MAX_INPUT_CHARS,
        }
    }
}
