//! In-memory Mastermind game store.
//!
//! Each game lives under its own id, so concurrent players never share a
//! secret. The store is cheap to clone and shared through the API state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::calculation::score_guess;
use crate::error::{EngineError, EngineResult};
use crate::models::{Code, Game, Score};

/// Outcome of one scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The hits and blows for this guess.
    pub score: Score,
    /// Guesses scored so far, this one included.
    pub attempts: u32,
    /// Whether the game has been solved.
    pub solved: bool,
}

/// Games in progress, keyed by id and capped at a fixed size.
#[derive(Debug, Clone)]
pub struct GameStore {
    games: Arc<RwLock<HashMap<Uuid, Game>>>,
    max_games: usize,
}

impl GameStore {
    /// Creates an empty store holding at most `max_games` games.
    pub fn new(max_games: usize) -> Self {
        Self {
            games: Arc::new(RwLock::new(HashMap::new())),
            max_games: max_games.max(1),
        }
    }

    /// Starts a game with a random secret and returns its id.
    pub async fn start(&self) -> Uuid {
        let secret = Code::random(&mut rand::rng());
        self.start_with(secret).await
    }

    /// Starts a game with the given secret and returns its id.
    ///
    /// Evicts the oldest game when the store is full.
    pub async fn start_with(&self, secret: Code) -> Uuid {
        let game = Game::new(secret);
        let id = game.id;

        let mut games = self.games.write().await;
        while games.len() >= self.max_games {
            let Some(oldest) = games
                .values()
                .min_by_key(|g| g.created_at)
                .map(|g| g.id)
            else {
                break;
            };
            games.remove(&oldest);
        }
        games.insert(id, game);
        id
    }

    /// Scores a guess against the secret of game `id`.
    pub async fn guess(&self, id: Uuid, guess: &Code) -> EngineResult<GuessOutcome> {
        let mut games = self.games.write().await;
        let game = games.get_mut(&id).ok_or_else(|| EngineError::GameNotFound {
            id: id.to_string(),
        })?;

        let score = score_guess(&game.secret, guess);
        game.attempts += 1;
        game.solved |= score.is_solved();

        Ok(GuessOutcome {
            score,
            attempts: game.attempts,
            solved: game.solved,
        })
    }

    /// Number of games currently held.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    /// Returns `true` if no games are held.
    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_ACTIVE_GAMES)
    }
}
