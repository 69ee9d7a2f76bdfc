//! Building and running a line-up of sessions.
//!
//! The driver numbers sessions in the order they are added, then runs them in
//! whatever order it is told. Each session gets its own RNG stream, forked
//! from the driver's RNG when the session is added, so outcomes depend only
//! on the seed and the order sessions were added, never on the run order.

use thiserror::Error;
use tracing::info;

use crate::core::{ConfigError, GameRng, GameRngState, SessionConfig, SessionError};
use crate::dice::DiceKind;
use crate::events::EventSink;
use crate::session::{GameSession, SessionId, SessionOutcome, SessionSequence};

/// Errors from building or running a line-up.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid session configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("{0} was never added")]
    UnknownSession(SessionId),

    #[error("{0} appears more than once in the run order")]
    DuplicateSession(SessionId),
}

/// What a finished session reports back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// RNG position the session started from. Restoring it with
    /// [`GameRng::from_state`] replays the session exactly.
    pub rng_start: GameRngState,
}

struct Slot {
    session: GameSession,
    rng: GameRng,
    rng_start: GameRngState,
}

/// Owns a line-up of sessions and runs them one at a time.
pub struct Driver {
    rng: GameRng,
    sequence: SessionSequence,
    slots: Vec<Slot>,
    run_order: Option<Vec<SessionId>>,
}

impl Driver {
    /// Create an empty driver drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            sequence: SessionSequence::new(),
            slots: Vec::new(),
            run_order: None,
        }
    }

    /// The reference line-up: three sessions, run second, third, first.
    ///
    /// | Session | Players | Dice            | Target |
    /// |---------|---------|-----------------|--------|
    /// | Game 1  | 2       | RussianRoulette | 20     |
    /// | Game 2  | 3       | D20             | 50     |
    /// | Game 3  | 4       | Rigged          | 40     |
    pub fn demo(rng: GameRng) -> Result<Self, DriverError> {
        let mut driver = Self::new(rng);

        let game1 = driver.add_session(&SessionConfig::new(2, DiceKind::RussianRoulette, 20))?;
        let game2 = driver.add_session(&SessionConfig::new(3, DiceKind::D20, 50))?;
        let game3 = driver.add_session(&SessionConfig::new(4, DiceKind::Rigged, 40))?;

        driver.set_run_order(vec![game2, game3, game1])?;
        Ok(driver)
    }

    /// Build a session and queue it. Ids are assigned in call order.
    pub fn add_session(&mut self, config: &SessionConfig) -> Result<SessionId, DriverError> {
        config.validate()?;

        let id = self.sequence.next_id();
        let session = GameSession::new(id, config)?;
        let rng = self.rng.fork();
        let rng_start = rng.state();

        self.slots.push(Slot {
            session,
            rng,
            rng_start,
        });
        Ok(id)
    }

    /// Run sessions in this order instead of the order they were added.
    ///
    /// Sessions left out of `order` are not run. Sessions are single-use, so
    /// each id may appear at most once.
    pub fn set_run_order(&mut self, order: Vec<SessionId>) -> Result<(), DriverError> {
        if let Some(&missing) = order.iter().find(|id| self.slot_index(**id).is_none()) {
            return Err(DriverError::UnknownSession(missing));
        }
        for (position, id) in order.iter().enumerate() {
            if order[..position].contains(id) {
                return Err(DriverError::DuplicateSession(*id));
            }
        }
        self.run_order = Some(order);
        Ok(())
    }

    /// Ids in the order [`Driver::run`] will play them.
    #[must_use]
    pub fn run_order(&self) -> Vec<SessionId> {
        match &self.run_order {
            Some(order) => order.clone(),
            None => self.slots.iter().map(|slot| slot.session.id()).collect(),
        }
    }

    /// Queued sessions, in the order they were added.
    pub fn sessions(&self) -> impl Iterator<Item = &GameSession> {
        self.slots.iter().map(|slot| &slot.session)
    }

    /// Play every queued session to completion, one after another.
    pub fn run<S: EventSink>(&mut self, mut sink: S) -> Result<Vec<SessionReport>, DriverError> {
        let order = self.run_order();
        let mut reports = Vec::with_capacity(order.len());

        for id in order {
            let index = self.slot_index(id).ok_or(DriverError::UnknownSession(id))?;
            let slot = &mut self.slots[index];

            let outcome = slot.session.play(&mut slot.rng, &mut sink)?;
            info!(session = %id, winner = %outcome.winner, "session complete");

            reports.push(SessionReport {
                outcome,
                rng_start: slot.rng_start,
            });
        }

        Ok(reports)
    }

    fn slot_index(&self, id: SessionId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.session.id() == id)
    }
}
