//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::DayShape;

use super::types::{
    MastermindConfig, ResponderConfig, ServerConfig, ServiceConfig, WorkingHoursConfig,
};

/// Loads and provides access to the service configuration.
///
/// The file holds up to four sections, each optional:
/// ```text
/// server:        { host, port }
/// working_hours: { work_start_hour, work_end_hour, lunch_start_hour,
///                  lunch_end_hour, deduct_lunch, max_span_days }
/// mastermind:    { max_active_games }
/// responder:     { max_input_chars }
/// ```
///
/// # Example
///
/// ```
/// use whiteboard_challenges::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_yaml_str("working_hours:\n  deduct_lunch: true\n", "inline")?;
/// assert!(loader.default_day_shape().deduct_lunch);
/// assert_eq!(loader.default_day_shape().work_start_hour, 9);
/// # Ok::<(), whiteboard_challenges::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or out-of-range values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Loads `path` if it exists, otherwise the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from YAML text; `source` names it in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let config: ServiceConfig = if content.trim().is_empty() {
            ServiceConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?
        };

        Self::validate(&config).map_err(|message| EngineError::ConfigParseError {
            path: source.to_string(),
            message,
        })?;

        Ok(Self { config })
    }

    fn validate(config: &ServiceConfig) -> Result<(), String> {
        config
            .working_hours
            .default_shape()
            .validate()
            .map_err(|e| e.to_string())?;

        if config.working_hours.max_span_days < 1 {
            return Err(format!(
                "working_hours.max_span_days must be at least 1, got {}",
                config.working_hours.max_span_days
            ));
        }
        if config.mastermind.max_active_games == 0 {
            return Err("mastermind.max_active_games must be at least 1".to_string());
        }
        if config.responder.max_input_chars == 0 {
            return Err("responder.max_input_chars must be at least 1".to_string());
        }
        Ok(())
    }

    /// Overrides the listening address, e.g. from `HOST`/`PORT`.
    pub fn with_server(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.config.server.host = host;
        }
        if let Some(port) = port {
            self.config.server.port = port;
        }
        self
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the listening address.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the working-hours section.
    pub fn working_hours(&self) -> &WorkingHoursConfig {
        &self.config.working_hours
    }

    /// Returns the Mastermind section.
    pub fn mastermind(&self) -> &MastermindConfig {
        &self.config.mastermind
    }

    /// Returns the responder section.
    pub fn responder(&self) -> &ResponderConfig {
        &self.config.responder
    }

    /// The day shape omitted request fields fall back to.
    pub fn default_day_shape(&self) -> DayShape {
        self.config.working_hours.default_shape()
    }

    /// Largest inclusive calendar span a working-hours request may cover.
    pub fn max_span_days(&self) -> i64 {
        self.config.working_hours.max_span_days
    }
}
