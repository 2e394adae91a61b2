//! Session configuration.
//!
//! A session is configured by its two players and the seed for the hash-key
//! generator. Everything else about Kuba (board size, layout, capture target)
//! is fixed by the rules.

use serde::{Deserialize, Serialize};

use super::marble::Color;
use crate::session::GameSession;

/// A player registration: display name and marble color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub color: Color,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl<S: Into<String>> From<(S, Color)> for PlayerSpec {
    fn from((name, color): (S, Color)) -> Self {
        Self::new(name, color)
    }
}

/// Errors from invalid player registrations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("both players registered with color {0}")]
    DuplicateColor(Color),

    #[error("both players registered with name {0:?}")]
    DuplicateName(String),

    #[error("player name must not be empty")]
    EmptyName,
}

/// Configuration for a new [`GameSession`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Players in registration order. Order matters for turn parity.
    pub players: [PlayerSpec; 2],

    /// Seed for the Zobrist key generator.
    /// Same seed produces identical hash values.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            players: [
                PlayerSpec::new("white", Color::White),
                PlayerSpec::new("black", Color::Black),
            ],
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom players.
    #[must_use]
    pub fn with_players(mut self, first: impl Into<PlayerSpec>, second: impl Into<PlayerSpec>) -> Self {
        self.players = [first.into(), second.into()];
        self
    }

    /// Check that the two registrations can coexist in one session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [first, second] = &self.players;
        if first.name.is_empty() || second.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if first.color == second.color {
            return Err(ConfigError::DuplicateColor(first.color));
        }
        if first.name == second.name {
            return Err(ConfigError::DuplicateName(first.name.clone()));
        }
        Ok(())
    }

    /// Build a session in the standard starting position.
    pub fn build(&self) -> Result<GameSession, ConfigError> {
        GameSession::from_config(self)
    }
}
