//! Core types: players, configuration, errors, random sources.
//!
//! Everything the turn loop needs except the dice themselves.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{SessionConfig, MAX_PLAYERS};
pub use error::{ConfigError, SessionError};
pub use player::{Player, PlayerId, TurnRecord};
pub use rng::{GameRng, GameRngState, RollSource};
#[cfg(any(test, feature = "testing"))]
pub use rng::ScriptedRolls;
