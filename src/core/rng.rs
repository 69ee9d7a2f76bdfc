//! Random sources for dice rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Forkable**: Each session gets its own independent stream
//! - **Serializable**: O(1) state capture and restore, for replaying a session
//! - **Pluggable**: Dice only see the [`RollSource`] trait, so tests can
//!   script exact faces with `ScriptedRolls` (`testing` feature)
//!
//! ```
//! use dice_race::core::{GameRng, RollSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut session_rng = rng.fork();
//!
//! let face = session_rng.roll_between(1, 6);
//! assert!((1..=6).contains(&face));
//!
//! // Forks are deterministic - same seed, same fork counter, same stream
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng2.fork().state(), GameRng::new(42).fork().state());
//! ```

#[cfg(any(test, feature = "testing"))]
use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Anything dice can draw randomness from.
pub trait RollSource {
    /// Uniform integer in the closed range `low..=high`.
    fn roll_between(&mut self, low: i64, high: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// Seeded ChaCha8 RNG with forking for per-session streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// Returns the seed too, so the run can be reproduced later.
    #[must_use]
    pub fn from_entropy() -> (Self, u64) {
        let seed = rand::thread_rng().gen::<u64>();
        (Self::new(seed), seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Get the current state for replaying.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RollSource for GameRng {
    fn roll_between(&mut self, low: i64, high: i64) -> i64 {
        self.inner.gen_range(low..=high)
    }

    fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Captured RNG position.
///
/// Uses ChaCha8 word position, so capture is O(1) regardless of
/// how many rolls came before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Stream seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// A source that replays a fixed script of faces.
///
/// Faces cycle once the script runs out and are clamped into whatever range
/// the dice ask for. An empty script always yields the low end of the range.
/// Every requested range is recorded, which lets callers check *what* a die
/// asked for independently of what it got.
///
/// Only built for tests and with the `testing` feature.
#[cfg(any(test, feature = "testing"))]
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    faces: VecDeque<i64>,
    units: VecDeque<f64>,
    requests: Vec<(i64, i64)>,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedRolls {
    /// Script the integer faces. Unit draws default to 0.5 (never a penalty).
    pub fn new(faces: impl IntoIterator<Item = i64>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            units: VecDeque::new(),
            requests: Vec::new(),
        }
    }

    /// Script the `[0, 1)` draws as well.
    #[must_use]
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units = units.into_iter().collect();
        self
    }

    /// Every `(low, high)` range requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> &[(i64, i64)] {
        &self.requests
    }
}

#[cfg(any(test, feature = "testing"))]
impl RollSource for ScriptedRolls {
    fn roll_between(&mut self, low: i64, high: i64) -> i64 {
        self.requests.push((low, high));
        match self.faces.pop_front() {
            Some(face) => {
                self.faces.push_back(face);
                face.clamp(low, high)
            }
            None => low,
        }
    }

    fn unit(&mut self) -> f64 {
        match self.units.pop_front() {
            Some(u) => {
                self.units.push_back(u);
                u
            }
            None => 0.5,
        }
    }
}
