//! Game sessions.
//!
//! A [`GameSession`] owns its players and its die outright, so sessions never
//! share state. Session numbers come from a [`SessionSequence`] held by the
//! caller rather than a global counter.

mod game;
mod sequence;

pub use game::{GameSession, SessionOutcome, SessionState};
pub use sequence::{SessionId, SessionSequence};
