//! Mastermind game models.
//!
//! This module defines the [`Color`] palette, the fixed-length [`Code`] used
//! for both secrets and guesses, the [`Score`] returned for a guess, and the
//! per-game [`Game`] record.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// Number of pegs in every code.
pub const CODE_LENGTH: usize = 4;

/// A peg color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Red peg.
    Red,
    /// Yellow peg.
    Yellow,
    /// Blue peg.
    Blue,
    /// Green peg.
    Green,
    /// Orange peg.
    Orange,
    /// Purple peg.
    Purple,
}

impl Color {
    /// Every color in palette order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Orange,
        Color::Purple,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Yellow => write!(f, "yellow"),
            Color::Blue => write!(f, "blue"),
            Color::Green => write!(f, "green"),
            Color::Orange => write!(f, "orange"),
            Color::Purple => write!(f, "purple"),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = EngineError;

    /// Parses a color name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|color| color.to_string() == name)
            .ok_or_else(|| EngineError::InvalidGuess {
                message: format!(
                    "unknown color '{}', expected one of red, yellow, blue, green, orange, purple",
                    s
                ),
            })
    }
}

/// An ordered code of exactly [`CODE_LENGTH`] colors.
///
/// On the wire a code is a JSON array of color names; arrays of any other
/// length are rejected.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::models::{Code, Color};
///
/// let code: Code = serde_json::from_str(r#"["red","blue","blue","green"]"#).unwrap();
/// assert_eq!(code.pegs()[1], Color::Blue);
/// assert!(serde_json::from_str::<Code>(r#"["red"]"#).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    /// Creates a code from its pegs.
    pub fn new(pegs: [Color; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    /// Draws a code uniformly at random, repeats allowed.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pegs = [Color::Red; CODE_LENGTH];
        for peg in pegs.iter_mut() {
            *peg = Color::ALL[rng.random_range(0..Color::ALL.len())];
        }
        Self(pegs)
    }

    /// The pegs in position order.
    pub fn pegs(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }
}

impl TryFrom<Vec<Color>> for Code {
    type Error = EngineError;

    fn try_from(pegs: Vec<Color>) -> Result<Self, Self::Error> {
        let len = pegs.len();
        let pegs: [Color; CODE_LENGTH] =
            pegs.try_into().map_err(|_| EngineError::InvalidGuess {
                message: format!("a code has exactly {} colors, got {}", CODE_LENGTH, len),
            })?;
        Ok(Self(pegs))
    }
}

impl From<Code> for Vec<Color> {
    fn from(code: Code) -> Self {
        code.0.to_vec()
    }
}

/// Feedback for one guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Right color in the right position.
    pub hits: u32,
    /// Right color in the wrong position.
    pub blows: u32,
}

impl Score {
    /// Returns `true` when every peg is a hit.
    pub fn is_solved(&self) -> bool {
        self.hits as usize == CODE_LENGTH
    }
}

/// One game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Game identifier handed to the player.
    pub id: Uuid,
    /// The code the player is trying to find.
    pub secret: Code,
    /// Guesses scored so far.
    pub attempts: u32,
    /// Whether a guess has matched the secret.
    pub solved: bool,
    /// When the game was started.
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Starts a game with the given secret.
    pub fn new(secret: Code) -> Self {
        Self {
            id: Uuid::new_v4(),
            secret,
            attempts: 0,
            solved: false,
            created_at: Utc::now(),
        }
    }
}
