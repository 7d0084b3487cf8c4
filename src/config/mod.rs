//! Configuration loading for the challenges service.
//!
//! This module loads the service configuration from a single YAML file:
//! listening address, working-hours defaults and limits, and the Mastermind
//! and responder caps.
//!
//! # Example
//!
//! ```no_run
//! use whiteboard_challenges::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/challenges.yaml").unwrap();
//! println!("Listening on port {}", config.server().port);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MAX_ACTIVE_GAMES, DEFAULT_MAX_SPAN_DAYS, MastermindConfig, ResponderConfig,
    ServerConfig, ServiceConfig, WorkingHoursConfig,
};
