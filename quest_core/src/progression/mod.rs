//! Progression - character creation, experience, gold and revival

mod rewards;

pub use rewards::apply_battle_rewards;

use crate::combatant::{Character, CharacterClass, Combatant};
use crate::config::ProgressionConstants;
use crate::error::{GameError, Result};
use tracing::info;

/// Level-up rules bound to a set of progression constants
#[derive(Debug, Clone, Default)]
pub struct Progression {
    pub constants: ProgressionConstants,
}

impl Progression {
    pub fn new(constants: ProgressionConstants) -> Self {
        Progression { constants }
    }

    /// Create a level 1 character of the named class with starting gold
    pub fn create_character(&self, name: &str, class_name: &str) -> Result<Character> {
        let class: CharacterClass = class_name.parse()?;
        let mut character = Character::new(name, class);
        character.gold = self.constants.starting_gold;
        Ok(character)
    }

    /// Add experience, levelling up as many times as the total allows
    ///
    /// Each level-up costs `level * xp_per_level` experience, raises max health,
    /// strength and magic, and fully restores health. Returns the number of
    /// level-ups. Dead characters cannot gain experience.
    pub fn gain_experience(&self, character: &mut Character, amount: u32) -> Result<u32> {
        if is_dead(character) {
            return Err(GameError::CharacterDead(character.name.clone()));
        }

        let mut level_ups = 0;
        character.experience = character.experience.saturating_add(amount);
        loop {
            let threshold = character.level.saturating_mul(self.constants.xp_per_level).max(1);
            if character.experience < threshold {
                break;
            }
            character.experience -= threshold;
            character.level += 1;
            character.max_health = character.max_health.saturating_add(self.constants.health_per_level);
            character.strength = character.strength.saturating_add(self.constants.strength_per_level);
            character.magic = character.magic.saturating_add(self.constants.magic_per_level);
            character.health = character.max_health;
            level_ups += 1;
        }

        if level_ups > 0 {
            info!(character = %character.name, level = character.level, level_ups, "level up");
        }
        Ok(level_ups)
    }
}

/// Create a character with the default progression constants
pub fn create_character(name: &str, class_name: &str) -> Result<Character> {
    Progression::default().create_character(name, class_name)
}

/// Gain experience with the default progression constants
pub fn gain_experience(character: &mut Character, amount: u32) -> Result<u32> {
    Progression::default().gain_experience(character, amount)
}

/// Add (or spend, when negative) gold. Returns the new total.
pub fn add_gold(character: &mut Character, amount: i64) -> Result<u32> {
    let total = i64::from(character.gold) + amount;
    let gold = u32::try_from(total).map_err(|_| GameError::InsufficientGold {
        current: character.gold,
        change: amount,
    })?;
    character.gold = gold;
    Ok(gold)
}

/// Heal up to max health. Returns the new health.
pub fn heal_character(character: &mut Character, amount: u32) -> u32 {
    character.heal(amount);
    character.health
}

pub fn is_dead(character: &Character) -> bool {
    !character.is_alive()
}

/// Bring a dead character back at half max health
///
/// Returns false (and changes nothing) if the character is still alive.
pub fn revive(character: &mut Character) -> bool {
    if character.is_alive() {
        return false;
    }
    character.health = character.max_health / 2;
    info!(character = %character.name, health = character.health, "revived");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_all_classes() {
        for class in CharacterClass::all() {
            let character = create_character("Hero", class.name()).unwrap();
            assert_eq!(character.class, *class);
            assert_eq!(character.health, character.max_health);
            assert_eq!(character.experience, 0);
            assert_eq!(character.gold, 100);
            assert_eq!(character.level, 1);
        }
    }

    #[test]
    fn test_create_invalid_class() {
        let err = create_character("Hero", "Bard").unwrap_err();
        assert!(matches!(err, GameError::InvalidCharacterClass(_)));
    }

    #[test]
    fn test_single_level_up() {
        let mut hero = create_character("Hero", "Warrior").unwrap();
        hero.health = 10;

        let level_ups = gain_experience(&mut hero, 130).unwrap();

        assert_eq!(level_ups, 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 30);
        assert_eq!(hero.max_health, 130);
        assert_eq!(hero.health, 130);
        assert_eq!(hero.strength, 17);
        assert_eq!(hero.magic, 7);
    }

    #[test]
    fn test_multiple_level_ups() {
        let mut hero = create_character("Hero", "Mage").unwrap();
        // Level 1 -> 2 costs 100, level 2 -> 3 costs 200
        let level_ups = gain_experience(&mut hero, 350).unwrap();
        assert_eq!(level_ups, 2);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.experience, 50);
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut hero = create_character("Hero", "Rogue").unwrap();
        assert_eq!(gain_experience(&mut hero, 99).unwrap(), 0);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.experience, 99);
    }

    #[test]
    fn test_dead_cannot_gain_experience() {
        let mut hero = create_character("Hero", "Cleric").unwrap();
        hero.health = 0;
        assert!(matches!(gain_experience(&mut hero, 50), Err(GameError::CharacterDead(_))));
        assert_eq!(hero.experience, 0);
    }

    #[test]
    fn test_custom_xp_curve() {
        let progression = Progression::new(ProgressionConstants {
            xp_per_level: 50,
            ..Default::default()
        });
        let mut hero = progression.create_character("Hero", "Warrior").unwrap();
        assert_eq!(progression.gain_experience(&mut hero, 50).unwrap(), 1);
    }

    #[test]
    fn test_gold() {
        let mut hero = create_character("Hero", "Warrior").unwrap();
        assert_eq!(add_gold(&mut hero, 25).unwrap(), 125);
        assert_eq!(add_gold(&mut hero, -125).unwrap(), 0);

        let err = add_gold(&mut hero, -1).unwrap_err();
        assert!(matches!(err, GameError::InsufficientGold { current: 0, change: -1 }));
        assert_eq!(hero.gold, 0);
    }

    #[test]
    fn test_heal_character_clamps() {
        let mut hero = create_character("Hero", "Cleric").unwrap();
        hero.health = 90;
        assert_eq!(heal_character(&mut hero, 30), 100);
    }

    #[test]
    fn test_revive() {
        let mut hero = create_character("Hero", "Warrior").unwrap();
        assert!(!revive(&mut hero));
        assert_eq!(hero.health, 120);

        hero.health = 0;
        assert!(is_dead(&hero));
        assert!(revive(&mut hero));
        assert_eq!(hero.health, 60);
        assert!(!is_dead(&hero));
    }
}
