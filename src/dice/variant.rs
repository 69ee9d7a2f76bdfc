//! Dice variants and their roll rules.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::kind::DiceKind;
use crate::core::rng::RollSource;

/// Score a Russian roulette die returns when the chamber fires.
pub const PENALTY: i64 = -1000;

/// Probability of the Russian roulette penalty on a single roll.
pub const PENALTY_CHANCE: f64 = 1.0 / 1000.0;

/// Every Nth roll of a rigged die is boosted.
pub const RIGGED_PERIOD: u64 = 8;

/// Lowest face a lucky player can roll.
pub const LUCKY_FLOOR: i64 = 3;

/// A die owned by one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dice {
    /// Uniform 1-6.
    Standard6,
    /// Uniform 1-6, with a 1/1000 chance of [`PENALTY`] instead.
    RussianRoulette,
    /// Uniform 1-20.
    D20,
    /// Uniform 1-6, except every 8th roll is uniform 3-6.
    Rigged {
        /// Rolls made so far. Never reset.
        rolls: u64,
    },
}

impl Dice {
    #[must_use]
    pub fn standard6() -> Self {
        Dice::Standard6
    }

    #[must_use]
    pub fn russian_roulette() -> Self {
        Dice::RussianRoulette
    }

    #[must_use]
    pub fn d20() -> Self {
        Dice::D20
    }

    #[must_use]
    pub fn rigged() -> Self {
        Dice::Rigged { rolls: 0 }
    }

    /// The selector this die was built from.
    #[must_use]
    pub fn kind(&self) -> DiceKind {
        match self {
            Dice::Standard6 => DiceKind::Standard6,
            Dice::RussianRoulette => DiceKind::RussianRoulette,
            Dice::D20 => DiceKind::D20,
            Dice::Rigged { .. } => DiceKind::Rigged,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Roll once.
    pub fn roll<R: RollSource + ?Sized>(&mut self, source: &mut R) -> i64 {
        self.roll_from(source, 1)
    }

    /// Roll once for a lucky player: regular faces start at [`LUCKY_FLOOR`].
    ///
    /// The Russian roulette penalty still applies.
    pub fn roll_lucky<R: RollSource + ?Sized>(&mut self, source: &mut R) -> i64 {
        self.roll_from(source, LUCKY_FLOOR)
    }

    fn roll_from<R: RollSource + ?Sized>(&mut self, source: &mut R, floor: i64) -> i64 {
        match self {
            Dice::Standard6 => source.roll_between(floor.max(1), 6),
            Dice::D20 => source.roll_between(floor.max(1), 20),
            Dice::RussianRoulette => {
                // Chamber check and face use independent draws
                if source.unit() < PENALTY_CHANCE {
                    warn!(penalty = PENALTY, "russian roulette fired");
                    return PENALTY;
                }
                source.roll_between(floor.max(1), 6)
            }
            Dice::Rigged { rolls } => {
                *rolls += 1;
                if *rolls % RIGGED_PERIOD == 0 {
                    source.roll_between(floor.max(3), 6)
                } else {
                    source.roll_between(floor.max(1), 6)
                }
            }
        }
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedRolls};

    #[test]
    fn test_names() {
        assert_eq!(Dice::standard6().name(), "Standard6Dice");
        assert_eq!(Dice::russian_roulette().name(), "RussianRouletteDice");
        assert_eq!(Dice::d20().name(), "D20Dice");
        assert_eq!(Dice::rigged().name(), "RiggedDice");
        assert_eq!(format!("{}", Dice::d20()), "D20Dice");
    }

    #[test]
    fn test_standard6_bounds() {
        let mut rng = GameRng::new(42);
        let mut dice = Dice::standard6();

        for _ in 0..1000 {
            assert!((1..=6).contains(&dice.roll(&mut rng)));
        }
    }

    #[test]
    fn test_d20_bounds() {
        let mut rng = GameRng::new(42);
        let mut dice = Dice::d20();
        let faces: Vec<_> = (0..2000).map(|_| dice.roll(&mut rng)).collect();

        assert!(faces.iter().all(|f| (1..=20).contains(f)));
        assert!(faces.contains(&1));
        assert!(faces.contains(&20));
    }

    #[test]
    fn test_russian_roulette_penalty_threshold() {
        let mut dice = Dice::russian_roulette();

        let mut fires = ScriptedRolls::new([4]).with_units([0.0009]);
        assert_eq!(dice.roll(&mut fires), PENALTY);
        assert!(fires.requests().is_empty());

        let mut misses = ScriptedRolls::new([4]).with_units([0.001]);
        assert_eq!(dice.roll(&mut misses), 4);
        assert_eq!(misses.requests(), &[(1, 6)]);
    }

    #[test]
    fn test_rigged_counter_persists() {
        let mut dice = Dice::rigged();
        let mut script = ScriptedRolls::new([1]);

        for _ in 0..7 {
            assert_eq!(dice.roll(&mut script), 1);
        }
        assert_eq!(dice.roll(&mut script), 3); // 8th roll, clamped into 3..=6
        assert_eq!(dice, Dice::Rigged { rolls: 8 });

        assert_eq!(dice.roll(&mut script), 1);
        assert_eq!(dice, Dice::Rigged { rolls: 9 });
    }

    #[test]
    fn test_lucky_floor() {
        let mut script = ScriptedRolls::new([1]);

        assert_eq!(Dice::standard6().roll_lucky(&mut script), 3);
        assert_eq!(Dice::d20().roll_lucky(&mut script), 3);
        assert_eq!(Dice::rigged().roll_lucky(&mut script), 3);
        assert_eq!(script.requests(), &[(3, 6), (3, 20), (3, 6)]);
    }

    #[test]
    fn test_lucky_still_takes_penalty() {
        let mut script = ScriptedRolls::new([6]).with_units([0.0]);
        assert_eq!(Dice::russian_roulette().roll_lucky(&mut script), PENALTY);
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in DiceKind::ALL {
            assert_eq!(kind.build().kind(), kind);
        }
    }
}
