//! The turn loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::sequence::SessionId;
use crate::core::{ConfigError, Player, PlayerId, RollSource, SessionConfig, SessionError};
use crate::dice::Dice;
use crate::events::{EventSink, GameEvent};

/// Lifecycle of a session. There is no way back from `Finished`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Created,
    Running,
    Finished,
}

/// Result of a completed session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Which session this was.
    pub session: SessionId,
    /// First player to reach the target.
    pub winner: PlayerId,
    /// Winner's score at the moment they won.
    pub winning_score: i64,
    /// Every player's score when the session ended, in player order.
    pub final_scores: Vec<(PlayerId, i64)>,
    /// Total turns across all players.
    pub turns_taken: u64,
    /// Passes over the player list, including the final partial one.
    pub rounds: u64,
}

impl SessionOutcome {
    /// Final score for one player.
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> Option<i64> {
        self.final_scores
            .iter()
            .find(|(id, _)| *id == player)
            .map(|&(_, score)| score)
    }
}

/// One game: players, a die, and a target score.
///
/// ## Turn Order
///
/// Players roll in creation order. The win check runs right after each
/// player's own turn, so the first player to reach the target ends the
/// session and nobody after them in that pass gets to roll.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: SessionId,
    players: Vec<Player>,
    dice: Dice,
    target_score: i64,
    state: SessionState,
}

impl GameSession {
    /// Build a session from a validated configuration.
    pub fn new(id: SessionId, config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = PlayerId::all(config.player_count)
            .map(|player| {
                if config.lucky_player == Some(player) {
                    Player::lucky(player)
                } else {
                    Player::new(player)
                }
            })
            .collect();

        Ok(Self {
            id,
            players,
            dice: config.dice.build(),
            target_score: config.target_score,
            state: SessionState::Created,
        })
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// `Game <n> with dice <name>`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} with dice {}", self.id, self.dice)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    #[must_use]
    pub fn target_score(&self) -> i64 {
        self.target_score
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session until someone wins.
    ///
    /// Sessions are single-use: a second call returns
    /// [`SessionError::AlreadyFinished`] without rolling.
    pub fn play<R, S>(&mut self, source: &mut R, mut sink: S) -> Result<SessionOutcome, SessionError>
    where
        R: RollSource + ?Sized,
        S: EventSink,
    {
        if self.state != SessionState::Created {
            return Err(SessionError::AlreadyFinished(self.id));
        }

        let label = self.label();
        self.state = SessionState::Running;
        info!(
            session = %self.id,
            dice = %self.dice,
            players = self.players.len(),
            target = self.target_score,
            "session started"
        );
        sink.emit(&GameEvent::SessionStarted {
            session: self.id,
            label: label.clone(),
        });

        let mut turns_taken = 0u64;
        let mut rounds = 0u64;
        let target = self.target_score;

        let winner = 'rounds: loop {
            rounds += 1;
            for player in self.players.iter_mut() {
                let record = player.take_turn(&mut self.dice, source);
                turns_taken += 1;
                debug!(
                    session = %self.id,
                    player = %record.player,
                    rolled = record.rolled,
                    score = record.score,
                    "turn"
                );
                sink.emit(&GameEvent::Turn {
                    session: self.id,
                    record,
                });

                if player.has_won(target) {
                    break 'rounds player.clone();
                }
            }
        };

        self.state = SessionState::Finished;
        info!(
            session = %self.id,
            winner = %winner,
            score = winner.score(),
            turns = turns_taken,
            "session finished"
        );
        sink.emit(&GameEvent::PlayerWon {
            session: self.id,
            player: winner.id(),
            lucky: winner.is_lucky(),
        });
        sink.emit(&GameEvent::SessionEnded {
            session: self.id,
            label,
        });

        Ok(SessionOutcome {
            session: self.id,
            winner: winner.id(),
            winning_score: winner.score(),
            final_scores: self.players.iter().map(|p| (p.id(), p.score())).collect(),
            turns_taken,
            rounds,
        })
    }
}
