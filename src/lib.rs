//! # dice-race
//!
//! A turn-based dice race: players take turns rolling a shared die and the
//! first to reach the target score wins.
//!
//! ## Design Principles
//!
//! 1. **Closed set of dice**: four variants, one enum. Stateful dice (rigged)
//!    keep their state inside the variant.
//!
//! 2. **Deterministic**: all randomness goes through a [`RollSource`]. Seeded
//!    `GameRng` for real games, `ScriptedRolls` (`testing` feature) for exact
//!    scenarios.
//!
//! 3. **No shared state**: each session owns its players, its die and its RNG
//!    stream. Session numbers come from an explicit sequence.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, errors, random sources
//! - `dice`: Dice variants and selectors
//! - `events`: Session events and sinks
//! - `session`: The turn loop
//! - `driver`: Running a line-up of sessions
//! - `procedural`: The same race as plain functions

pub mod core;
pub mod dice;
pub mod events;
pub mod session;
pub mod driver;
pub mod procedural;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, SessionError,
    GameRng, GameRngState, RollSource,
    Player, PlayerId, TurnRecord,
    SessionConfig, MAX_PLAYERS,
};
#[cfg(any(test, feature = "testing"))]
pub use crate::core::ScriptedRolls;

pub use crate::dice::{Dice, DiceKind};

pub use crate::events::{EventSink, GameEvent, LineReporter, NullSink};

pub use crate::session::{GameSession, SessionId, SessionOutcome, SessionSequence, SessionState};

pub use crate::driver::{Driver, DriverError, SessionReport};

pub use crate::procedural::{race, RaceError, RaceOutcome};
