//! Session configuration.
//!
//! A session is fully described by three values: how many players, which
//! dice, and the target score. A lucky player can be switched on
//! explicitly; it is off by default.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;
use crate::dice::DiceKind;

/// Player ids are `u8`.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Complete configuration for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Which dice the session rolls.
    pub dice: DiceKind,

    /// First player to reach this score wins.
    pub target_score: i64,

    /// Player who gets the lucky capability, if any.
    pub lucky_player: Option<PlayerId>,
}

impl SessionConfig {
    /// Create a new session configuration.
    ///
    /// Nothing is checked here; see [`SessionConfig::validate`].
    pub fn new(player_count: usize, dice: DiceKind, target_score: i64) -> Self {
        Self {
            player_count,
            dice,
            target_score,
            lucky_player: None,
        }
    }

    /// Make one player lucky.
    #[must_use]
    pub fn with_lucky_player(mut self, player: PlayerId) -> Self {
        self.lucky_player = Some(player);
        self
    }

    /// Reject configurations that would make a degenerate session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                count: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        if self.target_score <= 0 {
            return Err(ConfigError::NonPositiveTarget(self.target_score));
        }
        if let Some(lucky) = self.lucky_player {
            if lucky.index().map_or(true, |index| index >= self.player_count) {
                return Err(ConfigError::LuckyPlayerOutOfRange {
                    player: lucky,
                    player_count: self.player_count,
                });
            }
        }
        Ok(())
    }
}
