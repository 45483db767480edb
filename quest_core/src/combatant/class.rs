//! Character classes

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character class, fixed at creation. Selects the special ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

/// Starting stats for a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassBaseStats {
    pub health: u32,
    pub strength: u32,
    pub magic: u32,
}

impl CharacterClass {
    /// Get all classes
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Rogue,
            CharacterClass::Cleric,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Cleric => "Cleric",
        }
    }

    /// Display name of the class special ability
    pub fn ability_name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Power Strike",
            CharacterClass::Mage => "Fireball",
            CharacterClass::Rogue => "Critical Strike",
            CharacterClass::Cleric => "Heal",
        }
    }

    pub fn base_stats(&self) -> ClassBaseStats {
        match self {
            CharacterClass::Warrior => ClassBaseStats { health: 120, strength: 15, magic: 5 },
            CharacterClass::Mage => ClassBaseStats { health: 80, strength: 8, magic: 20 },
            CharacterClass::Rogue => ClassBaseStats { health: 90, strength: 12, magic: 10 },
            CharacterClass::Cleric => ClassBaseStats { health: 100, strength: 10, magic: 15 },
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = GameError;

    /// Class names are case-sensitive, matching the save file format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::all()
            .iter()
            .copied()
            .find(|class| class.name() == s)
            .ok_or_else(|| GameError::InvalidCharacterClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for class in CharacterClass::all() {
            assert_eq!(class.name().parse::<CharacterClass>().unwrap(), *class);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Necromancer".parse::<CharacterClass>().unwrap_err();
        assert!(matches!(err, GameError::InvalidCharacterClass(name) if name == "Necromancer"));
        assert!("warrior".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn test_base_stats() {
        let warrior = CharacterClass::Warrior.base_stats();
        assert_eq!((warrior.health, warrior.strength, warrior.magic), (120, 15, 5));

        let mage = CharacterClass::Mage.base_stats();
        assert_eq!((mage.health, mage.strength, mage.magic), (80, 8, 20));
    }
}
