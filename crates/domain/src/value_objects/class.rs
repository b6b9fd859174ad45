//! Character classes and their starting stat lines
//!
//! Classes are stored as lowercase text in the hosted store, so Display and
//! FromStr round-trip through the column values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The four playable classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Paladin,
}

/// Starting stat line granted to a level-1 character of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub mana: u32,
}

impl CharacterClass {
    /// All classes in presentation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
        CharacterClass::Paladin,
    ];

    /// Base stats for a freshly created character of this class.
    pub fn base_stats(&self) -> ClassStats {
        match self {
            CharacterClass::Warrior => ClassStats {
                health: 120,
                attack: 15,
                defense: 8,
                speed: 8,
                mana: 30,
            },
            CharacterClass::Mage => ClassStats {
                health: 80,
                attack: 12,
                defense: 4,
                speed: 12,
                mana: 80,
            },
            CharacterClass::Rogue => ClassStats {
                health: 90,
                attack: 13,
                defense: 6,
                speed: 16,
                mana: 40,
            },
            CharacterClass::Paladin => ClassStats {
                health: 100,
                attack: 10,
                defense: 12,
                speed: 10,
                mana: 60,
            },
        }
    }

    /// Short flavor text shown in the class picker.
    pub fn description(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Strong melee fighter with high health and attack",
            CharacterClass::Mage => "Magical spellcaster with high mana and magical damage",
            CharacterClass::Rogue => "Agile assassin with high speed and critical strikes",
            CharacterClass::Paladin => "Holy warrior with balanced stats and healing abilities",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CharacterClass::Warrior => "warrior",
            CharacterClass::Mage => "mage",
            CharacterClass::Rogue => "rogue",
            CharacterClass::Paladin => "paladin",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warrior" => Ok(Self::Warrior),
            "mage" => Ok(Self::Mage),
            "rogue" => Ok(Self::Rogue),
            "paladin" => Ok(Self::Paladin),
            other => Err(DomainError::parse(format!(
                "Unknown character class: {}",
                other
            ))),
        }
    }
}
