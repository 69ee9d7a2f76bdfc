//! Error types.
//!
//! Configuration is checked once, when a session is built. After that the
//! turn loop is total: the only runtime error is replaying a finished session.

use thiserror::Error;

use super::player::PlayerId;
use crate::session::SessionId;

/// A session configuration that would produce a degenerate game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Zero players would loop forever.
    #[error("a session needs at least 1 player")]
    NoPlayers,

    /// Player ids are `u8`.
    #[error("{count} players requested, at most {max} supported")]
    TooManyPlayers { count: usize, max: usize },

    /// Target must be reachable by a positive roll.
    #[error("target score must be positive, got {0}")]
    NonPositiveTarget(i64),

    /// Dice selector did not name a known variant.
    #[error("unknown dice '{0}' (expected standard6, russian-roulette, d20 or rigged)")]
    UnknownDice(String),

    /// Lucky player id is outside `1..=player_count`.
    #[error("lucky player {player} is not in a {player_count}-player session")]
    LuckyPlayerOutOfRange { player: PlayerId, player_count: usize },
}

/// Errors raised while playing a session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Sessions are single-use.
    #[error("{0} is already finished")]
    AlreadyFinished(SessionId),
}
