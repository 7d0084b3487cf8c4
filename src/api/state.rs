//! Application state for the challenges API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::responder::{Responder, SnarkyResponder};
use crate::store::GameStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration, the Mastermind games in progress and the chat
/// responder.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    games: GameStore,
    responder: Arc<dyn Responder>,
}

impl AppState {
    /// Creates application state sized from the given configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let games = GameStore::new(config.mastermind().max_active_games);
        let responder = Arc::new(SnarkyResponder::new(config.responder().max_input_chars));
        Self {
            config: Arc::new(config),
            games,
            responder,
        }
    }

    /// Replaces the chat responder.
    pub fn with_responder(mut self, responder: Arc<dyn Responder>) -> Self {
        self.responder = responder;
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the Mastermind game store.
    pub fn games(&self) -> &GameStore {
        &self.games
    }

    /// Returns the chat responder.
    pub fn responder(&self) -> &dyn Responder {
        self.responder.as_ref()
    }
}
