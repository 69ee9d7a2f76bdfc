//! Session events.
//!
//! A session reports what happens as a stream of [`GameEvent`]s:
//! one start, one per turn, one win, one end. `Display` renders each
//! as the line a player would see.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, TurnRecord};
use crate::session::SessionId;

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The session left `Created`.
    SessionStarted {
        session: SessionId,
        label: String,
    },

    /// A player rolled.
    Turn {
        session: SessionId,
        record: TurnRecord,
    },

    /// A player reached the target.
    PlayerWon {
        session: SessionId,
        player: PlayerId,
        lucky: bool,
    },

    /// The session is finished.
    SessionEnded {
        session: SessionId,
        label: String,
    },
}

impl GameEvent {
    /// The session this event belongs to.
    #[must_use]
    pub fn session(&self) -> SessionId {
        match self {
            GameEvent::SessionStarted { session, .. }
            | GameEvent::Turn { session, .. }
            | GameEvent::PlayerWon { session, .. }
            | GameEvent::SessionEnded { session, .. } => *session,
        }
    }

    /// The turn record, for `Turn` events.
    #[must_use]
    pub fn as_turn(&self) -> Option<&TurnRecord> {
        match self {
            GameEvent::Turn { record, .. } => Some(record),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::SessionStarted { label, .. } => write!(f, "{} start", label),
            GameEvent::Turn { record, .. } => write!(
                f,
                "Player score: {} (rolled a {})",
                record.score, record.rolled
            ),
            GameEvent::PlayerWon { player, lucky: false, .. } => write!(f, "{} won!", player),
            GameEvent::PlayerWon { player, lucky: true, .. } => write!(f, "{} (lucky) won!", player),
            GameEvent::SessionEnded { label, .. } => write!(f, "{} is over", label),
        }
    }
}
