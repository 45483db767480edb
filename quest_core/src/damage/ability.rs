//! Class special abilities

use super::calculation::scaled_damage;
use crate::combatant::{Character, CharacterClass, Combatant, Enemy};
use crate::config::CombatConstants;
use crate::error::{GameError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What an ability does to the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum EffectKind {
    /// Damage dealt to the enemy
    Damage(u32),
    /// Health restored to the user (already clamped to max_health)
    Heal(u32),
    /// The ability fired but had no effect
    Miss,
}

/// Outcome of a special ability, applied by the battle engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEffect {
    pub ability: String,
    /// Human-readable description for the battle log
    pub description: String,
    pub kind: EffectKind,
}

/// Resolve the character's class ability against an enemy
///
/// Nothing is mutated here: the returned effect is applied by the caller.
/// Fails with `AbilityOnCooldown` while the character's cooldown is running.
pub fn use_special_ability(
    character: &Character,
    enemy: &Enemy,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> Result<AbilityEffect> {
    if !character.is_ability_ready() {
        return Err(GameError::AbilityOnCooldown {
            ability: character.class.ability_name().to_string(),
            turns: character.ability_cooldown,
        });
    }

    let effect = match character.class {
        CharacterClass::Warrior => warrior_power_strike(character, enemy, constants),
        CharacterClass::Mage => mage_fireball(character, enemy, constants),
        CharacterClass::Rogue => rogue_critical_strike(character, enemy, constants, rng),
        CharacterClass::Cleric => cleric_heal(character, constants),
    };
    Ok(effect)
}

fn warrior_power_strike(character: &Character, enemy: &Enemy, constants: &CombatConstants) -> AbilityEffect {
    let damage = scaled_damage(
        character.strength,
        constants.power_strike_multiplier,
        enemy.strength,
        constants,
    );
    AbilityEffect {
        ability: "Power Strike".to_string(),
        description: format!("{} uses Power Strike on {} for {} damage!", character.name, enemy.name, damage),
        kind: EffectKind::Damage(damage),
    }
}

fn mage_fireball(character: &Character, enemy: &Enemy, constants: &CombatConstants) -> AbilityEffect {
    let damage = scaled_damage(character.magic, constants.fireball_multiplier, enemy.magic, constants);
    AbilityEffect {
        ability: "Fireball".to_string(),
        description: format!("{} hurls a Fireball at {} for {} damage!", character.name, enemy.name, damage),
        kind: EffectKind::Damage(damage),
    }
}

fn rogue_critical_strike(
    character: &Character,
    enemy: &Enemy,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> AbilityEffect {
    if rng.gen::<f64>() < constants.critical_strike_chance {
        let damage = scaled_damage(
            character.strength,
            constants.critical_strike_multiplier,
            enemy.strength,
            constants,
        );
        AbilityEffect {
            ability: "Critical Strike".to_string(),
            description: format!("{} lands a Critical Strike on {} for {} damage!", character.name, enemy.name, damage),
            kind: EffectKind::Damage(damage),
        }
    } else {
        AbilityEffect {
            ability: "Critical Strike".to_string(),
            description: format!("{}'s Critical Strike misses {}!", character.name, enemy.name),
            kind: EffectKind::Miss,
        }
    }
}

fn cleric_heal(character: &Character, constants: &CombatConstants) -> AbilityEffect {
    let missing = character.max_health().saturating_sub(character.health());
    let restored = constants.heal_amount.min(missing);
    AbilityEffect {
        ability: "Heal".to_string(),
        description: format!("{} casts Heal and restores {} health!", character.name, restored),
        kind: EffectKind::Heal(restored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    /// Always rolls 0.0, so every chance check succeeds
    fn lucky() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Always rolls just below 1.0, so every chance check fails
    fn unlucky() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn goblin() -> Enemy {
        Enemy::new("Goblin", 50, 8, 2, 25, 10)
    }

    #[test]
    fn test_power_strike() {
        let warrior = Character::new("Hero", CharacterClass::Warrior);
        let effect = use_special_ability(&warrior, &goblin(), &CombatConstants::default(), &mut lucky()).unwrap();
        // 15 * 2 - 8 / 4 = 28
        assert_eq!(effect.kind, EffectKind::Damage(28));
        assert!(effect.description.contains("Power Strike"));
    }

    #[test]
    fn test_fireball_uses_magic() {
        let mage = Character::new("Aria", CharacterClass::Mage);
        let effect = use_special_ability(&mage, &goblin(), &CombatConstants::default(), &mut lucky()).unwrap();
        // 20 * 2 - 2 / 4 = 40
        assert_eq!(effect.kind, EffectKind::Damage(40));
    }

    #[test]
    fn test_critical_strike_hit() {
        let rogue = Character::new("Vex", CharacterClass::Rogue);
        let effect = use_special_ability(&rogue, &goblin(), &CombatConstants::default(), &mut lucky()).unwrap();
        // 12 * 3 - 8 / 4 = 34
        assert_eq!(effect.kind, EffectKind::Damage(34));
    }

    #[test]
    fn test_critical_strike_miss() {
        let rogue = Character::new("Vex", CharacterClass::Rogue);
        let effect = use_special_ability(&rogue, &goblin(), &CombatConstants::default(), &mut unlucky()).unwrap();
        assert_eq!(effect.kind, EffectKind::Miss);
        assert!(effect.description.contains("misses"));
    }

    #[test]
    fn test_cleric_heal_clamped() {
        let mut cleric = Character::new("Sol", CharacterClass::Cleric);
        cleric.health = 90;
        let effect = use_special_ability(&cleric, &goblin(), &CombatConstants::default(), &mut lucky()).unwrap();
        assert_eq!(effect.kind, EffectKind::Heal(10));
    }

    #[test]
    fn test_cooldown_blocks_ability() {
        let mut warrior = Character::new("Hero", CharacterClass::Warrior);
        warrior.ability_cooldown = 2;
        let err = use_special_ability(&warrior, &goblin(), &CombatConstants::default(), &mut lucky()).unwrap_err();
        assert!(matches!(err, GameError::AbilityOnCooldown { turns: 2, .. }));
    }

    #[test]
    fn test_effect_serialization() {
        let json = serde_json::to_string(&EffectKind::Damage(12)).unwrap();
        assert!(json.contains("damage"));
        assert!(json.contains("12"));
    }
}
