//! Players and their turns.
//!
//! ## PlayerId
//!
//! 1-based player identifier, assigned in creation order.
//!
//! ## Player
//!
//! A score accumulator. Each turn rolls the session's dice once and adds
//! the result, which may be negative.

use serde::{Deserialize, Serialize};

use super::rng::RollSource;
use crate::dice::Dice;

/// Player identifier supporting 1-255 players.
///
/// Ids are 1-based: the first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id (1-based).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Position of this player in creation order (0-based).
    ///
    /// `None` for `PlayerId(0)`, which no session ever hands out.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    ///
    /// Stops at `PlayerId(255)`; larger counts are rejected by
    /// [`SessionConfig::validate`](crate::core::SessionConfig::validate).
    ///
    /// ```
    /// use dice_race::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count).map_while(|n| u8::try_from(n).ok().map(PlayerId))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// The result of one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who rolled.
    pub player: PlayerId,
    /// What the dice produced.
    pub rolled: i64,
    /// Score after adding the roll.
    pub score: i64,
}

/// A player in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    score: i64,
    lucky: bool,
}

impl Player {
    /// Create a player with a zero score.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            lucky: false,
        }
    }

    /// Create a lucky player: their regular faces never go below 3.
    #[must_use]
    pub fn lucky(id: PlayerId) -> Self {
        Self {
            lucky: true,
            ..Self::new(id)
        }
    }

    /// This player's id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Current score. Can be negative after a penalty roll.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Whether this player has the lucky capability.
    #[must_use]
    pub fn is_lucky(&self) -> bool {
        self.lucky
    }

    /// Roll once and add the result to the score.
    pub fn take_turn<R: RollSource + ?Sized>(&mut self, dice: &mut Dice, source: &mut R) -> TurnRecord {
        let rolled = if self.lucky {
            dice.roll_lucky(source)
        } else {
            dice.roll(source)
        };
        self.score += rolled;

        TurnRecord {
            player: self.id,
            rolled,
            score: self.score,
        }
    }

    /// True once the score reaches or passes `target`.
    #[must_use]
    pub fn has_won(&self, target: i64) -> bool {
        self.score >= target
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.lucky {
            write!(f, "{} (lucky)", self.id)
        } else {
            write!(f, "{}", self.id)
        }
    }
}
