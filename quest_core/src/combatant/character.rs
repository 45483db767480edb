//! Player character record

use super::{CharacterClass, Combatant};
use serde::{Deserialize, Serialize};

/// A player character. Owned by the caller across battles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique per save, used as the save file key
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub experience: u32,
    pub gold: u32,

    // === Resources ===
    pub health: u32,
    pub max_health: u32,

    // === Offense ===
    pub strength: u32,
    pub magic: u32,

    // === Carried for persistence ===
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub active_quests: Vec<String>,
    #[serde(default)]
    pub completed_quests: Vec<String>,

    /// Rounds until the special ability is ready again (0 = ready).
    /// Never written to save files.
    #[serde(default)]
    pub ability_cooldown: u32,
}

impl Character {
    /// Create a level 1 character at full health with the class base stats
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        let stats = class.base_stats();
        Character {
            name: name.into(),
            class,
            level: 1,
            experience: 0,
            gold: 0,
            health: stats.health,
            max_health: stats.health,
            strength: stats.strength,
            magic: stats.magic,
            inventory: Vec::new(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
            ability_cooldown: 0,
        }
    }

    pub fn is_ability_ready(&self) -> bool {
        self.ability_cooldown == 0
    }

    pub fn tick_ability_cooldown(&mut self) {
        self.ability_cooldown = self.ability_cooldown.saturating_sub(1);
    }

    /// One-line stat summary
    pub fn summary(&self) -> String {
        format!(
            "{} the {} (Lv {}) HP {}/{} STR {} MAG {} XP {} Gold {}",
            self.name,
            self.class,
            self.level,
            self.health,
            self.max_health,
            self.strength,
            self.magic,
            self.experience,
            self.gold
        )
    }
}

impl Combatant for Character {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn max_health(&self) -> u32 {
        self.max_health
    }

    fn strength(&self) -> u32 {
        self.strength
    }

    fn magic(&self) -> u32 {
        self.magic
    }

    fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character_full_health() {
        for class in CharacterClass::all() {
            let character = Character::new("Hero", *class);
            assert_eq!(character.health, character.max_health);
            assert_eq!(character.level, 1);
            assert_eq!(character.experience, 0);
            assert!(character.is_ability_ready());
        }
    }

    #[test]
    fn test_cooldown_ticks_to_zero() {
        let mut character = Character::new("Hero", CharacterClass::Rogue);
        character.ability_cooldown = 2;
        character.tick_ability_cooldown();
        assert_eq!(character.ability_cooldown, 1);
        character.tick_ability_cooldown();
        character.tick_ability_cooldown();
        assert!(character.is_ability_ready());
    }

    #[test]
    fn test_summary() {
        let character = Character::new("Aria", CharacterClass::Mage);
        let summary = character.summary();
        assert!(summary.contains("Aria the Mage"));
        assert!(summary.contains("HP 80/80"));
    }
}
