//! Distribution tests for every dice variant.
//!
//! Large samples from a seeded RNG, so the checks are deterministic while
//! still exercising the real ChaCha stream.

use dice_race::core::{GameRng, ScriptedRolls};
use dice_race::dice::{Dice, DiceKind, PENALTY, RIGGED_PERIOD};

const SAMPLES: usize = 100_000;

fn sample(dice: &mut Dice, seed: u64, count: usize) -> Vec<i64> {
    let mut rng = GameRng::new(seed);
    (0..count).map(|_| dice.roll(&mut rng)).collect()
}

fn mean(values: &[i64]) -> f64 {
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

// =============================================================================
// Uniform Dice
// =============================================================================

#[test]
fn test_standard6_distribution() {
    let rolls = sample(&mut Dice::standard6(), 42, SAMPLES);

    assert!(rolls.iter().all(|r| (1..=6).contains(r)));
    assert!((mean(&rolls) - 3.5).abs() < 0.05, "mean was {}", mean(&rolls));

    for face in 1..=6 {
        let share = rolls.iter().filter(|&&r| r == face).count() as f64 / SAMPLES as f64;
        assert!((share - 1.0 / 6.0).abs() < 0.01, "face {} share {}", face, share);
    }
}

#[test]
fn test_d20_distribution() {
    let rolls = sample(&mut Dice::d20(), 42, SAMPLES);

    assert!(rolls.iter().all(|r| (1..=20).contains(r)));
    assert!((mean(&rolls) - 10.5).abs() < 0.1, "mean was {}", mean(&rolls));

    for face in 1..=20 {
        assert!(rolls.contains(&face), "face {} never rolled", face);
    }
}

// =============================================================================
// Russian Roulette
// =============================================================================

#[test]
fn test_russian_roulette_penalty_rate() {
    let count = 200_000;
    let rolls = sample(&mut Dice::russian_roulette(), 7, count);

    let penalties = rolls.iter().filter(|&&r| r == PENALTY).count();
    // Expect 200, sd ~14
    assert!((120..=280).contains(&penalties), "{} penalties", penalties);

    assert!(rolls
        .iter()
        .filter(|&&r| r != PENALTY)
        .all(|r| (1..=6).contains(r)));
}

#[test]
fn test_russian_roulette_regular_faces_uniform() {
    let rolls = sample(&mut Dice::russian_roulette(), 9, SAMPLES);
    let regular: Vec<_> = rolls.into_iter().filter(|&r| r != PENALTY).collect();

    assert!((mean(&regular) - 3.5).abs() < 0.05);
}

// =============================================================================
// Rigged
// =============================================================================

#[test]
fn test_rigged_periodicity_is_exact() {
    let mut dice = Dice::rigged();
    let mut script = ScriptedRolls::new([1]);

    let rolls: Vec<_> = (0..16).map(|_| dice.roll(&mut script)).collect();

    for (i, &(low, high)) in script.requests().iter().enumerate() {
        let call = i as u64 + 1;
        if call % RIGGED_PERIOD == 0 {
            assert_eq!((low, high), (3, 6), "call {} should be boosted", call);
        } else {
            assert_eq!((low, high), (1, 6), "call {} should be plain", call);
        }
    }

    // Script always asks for the lowest face
    let expected: Vec<i64> = (1..=16).map(|call| if call % 8 == 0 { 3 } else { 1 }).collect();
    assert_eq!(rolls, expected);
}

#[test]
fn test_rigged_distribution() {
    let rolls = sample(&mut Dice::rigged(), 42, 80_000);

    let (boosted, plain): (Vec<_>, Vec<_>) = rolls
        .iter()
        .enumerate()
        .partition(|(i, _)| (*i as u64 + 1) % RIGGED_PERIOD == 0);
    let boosted: Vec<i64> = boosted.into_iter().map(|(_, &r)| r).collect();
    let plain: Vec<i64> = plain.into_iter().map(|(_, &r)| r).collect();

    assert_eq!(boosted.len(), 10_000);
    assert!(boosted.iter().all(|r| (3..=6).contains(r)));
    assert!(plain.iter().all(|r| (1..=6).contains(r)));

    assert!((mean(&boosted) - 4.5).abs() < 0.1, "boosted mean {}", mean(&boosted));
    assert!((mean(&plain) - 3.5).abs() < 0.05, "plain mean {}", mean(&plain));
}

// =============================================================================
// Lucky Rolls
// =============================================================================

#[test]
fn test_lucky_standard6_distribution() {
    let mut rng = GameRng::new(3);
    let mut dice = Dice::standard6();
    let rolls: Vec<_> = (0..SAMPLES).map(|_| dice.roll_lucky(&mut rng)).collect();

    assert!(rolls.iter().all(|r| (3..=6).contains(r)));
    assert!((mean(&rolls) - 4.5).abs() < 0.05);
}

#[test]
fn test_every_kind_builds_fresh_state() {
    for kind in DiceKind::ALL {
        let mut first = kind.build();
        sample(&mut first, 1, 20);

        // Building again never inherits another die's counter
        if kind == DiceKind::Rigged {
            assert_eq!(first, Dice::Rigged { rolls: 20 });
            assert_eq!(kind.build(), Dice::Rigged { rolls: 0 });
        }
    }
}
