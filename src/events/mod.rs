//! Session events and where they go.
//!
//! Sessions never print. They hand each [`GameEvent`] to an [`EventSink`]:
//!
//! - `Vec<GameEvent>`: keeps everything, for tests and post-game inspection
//! - [`LineReporter`]: writes the human-readable lines to any `io::Write`
//! - [`NullSink`]: drops everything
//!
//! ```
//! use dice_race::core::{GameRng, SessionConfig};
//! use dice_race::dice::DiceKind;
//! use dice_race::events::GameEvent;
//! use dice_race::session::{GameSession, SessionId};
//!
//! let config = SessionConfig::new(2, DiceKind::Standard6, 10);
//! let mut session = GameSession::new(SessionId::new(1), &config).unwrap();
//!
//! let mut log: Vec<GameEvent> = Vec::new();
//! session.play(&mut GameRng::new(42), &mut log).unwrap();
//!
//! assert_eq!(log.first().unwrap().to_string(), "Game 1 with dice Standard6Dice start");
//! assert_eq!(log.last().unwrap().to_string(), "Game 1 with dice Standard6Dice is over");
//! ```

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventSink, LineReporter, NullSink};
