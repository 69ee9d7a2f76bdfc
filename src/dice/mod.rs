//! Dice strategies.
//!
//! The set of dice is closed: four variants, each with a fixed distribution.
//!
//! - [`Dice`]: a live die, owned by one session. `Rigged` carries state.
//! - [`DiceKind`]: the plain selector used in configuration and on the
//!   command line. `DiceKind::build` produces a fresh die.
//!
//! ```
//! use dice_race::core::GameRng;
//! use dice_race::dice::DiceKind;
//!
//! let mut rng = GameRng::new(42);
//! let mut dice = "d20".parse::<DiceKind>().unwrap().build();
//!
//! assert_eq!(dice.name(), "D20Dice");
//! assert!((1..=20).contains(&dice.roll(&mut rng)));
//! ```

mod kind;
mod variant;

pub use kind::DiceKind;
pub use variant::{Dice, LUCKY_FLOOR, PENALTY, PENALTY_CHANCE, RIGGED_PERIOD};
