//! The same race, written as plain functions over a score vector.
//!
//! No sessions, no events, no dice objects: every move is a fair six-sided
//! roll printed straight to the writer. Kept alongside the session engine to
//! show the two styles side by side.
//!
//! ```
//! use dice_race::core::GameRng;
//! use dice_race::procedural::{race, DEFAULT_PLAYERS};
//!
//! let mut out: Vec<u8> = Vec::new();
//! let outcome = race(&mut GameRng::new(42), DEFAULT_PLAYERS, 20, &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.ends_with(&format!("Player {} wins!\n", outcome.winner)));
//! ```

use std::io::{self, Write};

use thiserror::Error;

use crate::core::{ConfigError, RollSource, SessionConfig};
use crate::dice::DiceKind;

/// Two players, like the classic version.
pub const DEFAULT_PLAYERS: usize = 2;

/// First to 100.
pub const DEFAULT_TARGET: i64 = 100;

#[derive(Debug, Error)]
pub enum RaceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write race output: {0}")]
    Io(#[from] io::Error),
}

/// How a race ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceOutcome {
    /// 1-based number of the winning player.
    pub winner: usize,
    /// Final scores, index 0 is player 1.
    pub scores: Vec<i64>,
    /// Total moves made.
    pub moves: u64,
}

/// One move: roll a fair die, print, return the new score.
pub fn player_move<R, W>(source: &mut R, player: usize, previous_score: i64, out: &mut W) -> io::Result<i64>
where
    R: RollSource + ?Sized,
    W: Write,
{
    let roll = source.roll_between(1, 6);
    let score = previous_score + roll;
    writeln!(out, "Player {} score: {} (rolled a {})", player, score, roll)?;
    Ok(score)
}

/// Race `player_count` players to `target`. Players are numbered from 1.
pub fn race<R, W>(source: &mut R, player_count: usize, target: i64, out: &mut W) -> Result<RaceOutcome, RaceError>
where
    R: RollSource + ?Sized,
    W: Write,
{
    SessionConfig::new(player_count, DiceKind::Standard6, target).validate()?;

    let mut scores = vec![0i64; player_count];
    let mut moves = 0u64;

    let winner = 'race: loop {
        for (index, score) in scores.iter_mut().enumerate() {
            let player = index + 1;
            *score = player_move(source, player, *score, out)?;
            moves += 1;

            if *score >= target {
                break 'race player;
            }
        }
    };

    writeln!(out, "Player {} wins!", winner)?;
    Ok(RaceOutcome {
        winner,
        scores,
        moves,
    })
}
