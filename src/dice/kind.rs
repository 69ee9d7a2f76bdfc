//! Dice selectors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::variant::Dice;
use crate::core::error::ConfigError;

/// Names one of the four dice variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiceKind {
    Standard6,
    RussianRoulette,
    D20,
    Rigged,
}

impl DiceKind {
    /// Every variant, in declaration order.
    pub const ALL: [DiceKind; 4] = [
        DiceKind::Standard6,
        DiceKind::RussianRoulette,
        DiceKind::D20,
        DiceKind::Rigged,
    ];

    /// Build a fresh die of this kind.
    #[must_use]
    pub fn build(self) -> Dice {
        match self {
            DiceKind::Standard6 => Dice::standard6(),
            DiceKind::RussianRoulette => Dice::russian_roulette(),
            DiceKind::D20 => Dice::d20(),
            DiceKind::Rigged => Dice::rigged(),
        }
    }

    /// Display name used in session labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DiceKind::Standard6 => "Standard6Dice",
            DiceKind::RussianRoulette => "RussianRouletteDice",
            DiceKind::D20 => "D20Dice",
            DiceKind::Rigged => "RiggedDice",
        }
    }
}

impl std::fmt::Display for DiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiceKind {
    type Err = ConfigError;

    /// Case-insensitive. Accepts short names and the display names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "standard6" | "standard6dice" | "standard" | "d6" => Ok(DiceKind::Standard6),
            "russianroulette" | "russianroulettedice" | "roulette" => Ok(DiceKind::RussianRoulette),
            "d20" | "d20dice" => Ok(DiceKind::D20),
            "rigged" | "riggeddice" => Ok(DiceKind::Rigged),
            _ => Err(ConfigError::UnknownDice(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_names() {
        assert_eq!("standard6".parse(), Ok(DiceKind::Standard6));
        assert_eq!("d6".parse(), Ok(DiceKind::Standard6));
        assert_eq!("russian-roulette".parse(), Ok(DiceKind::RussianRoulette));
        assert_eq!("d20".parse(), Ok(DiceKind::D20));
        assert_eq!("rigged".parse(), Ok(DiceKind::Rigged));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("D20".parse(), Ok(DiceKind::D20));
        assert_eq!("RiggedDice".parse(), Ok(DiceKind::Rigged));
        assert_eq!("Russian_Roulette".parse(), Ok(DiceKind::RussianRoulette));
    }

    #[test]
    fn test_parse_display_names() {
        for kind in DiceKind::ALL {
            assert_eq!(kind.name().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "d12".parse::<DiceKind>(),
            Err(ConfigError::UnknownDice("d12".to_string()))
        );
        assert!("".parse::<DiceKind>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DiceKind::RussianRoulette).unwrap();
        assert_eq!(json, "\"russian-roulette\"");

        let kind: DiceKind = serde_json::from_str("\"d20\"").unwrap();
        assert_eq!(kind, DiceKind::D20);
    }
}
