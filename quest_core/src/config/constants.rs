//! Game constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub progression: ProgressionConstants,
}

impl GameConstants {
    /// Load and validate constants from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse and validate constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let combat = &self.combat;
        if combat.defense_divisor == 0 {
            return Err(ConfigError::ValidationError(
                "combat.defense_divisor must be at least 1".to_string(),
            ));
        }
        for (field, chance) in [
            ("combat.escape_chance", combat.escape_chance),
            ("combat.critical_strike_chance", combat.critical_strike_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be within [0, 1], got {}",
                    field, chance
                )));
            }
        }
        if self.progression.xp_per_level == 0 {
            return Err(ConfigError::ValidationError(
                "progression.xp_per_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Damage, ability and escape tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Defender strength (or magic) is divided by this before being subtracted
    #[serde(default = "default_defense_divisor")]
    pub defense_divisor: u32,
    /// Floor applied to every damaging hit
    #[serde(default = "default_min_damage")]
    pub min_damage: u32,
    /// Probability in [0, 1) that an escape attempt succeeds
    #[serde(default = "default_half_chance")]
    pub escape_chance: f64,
    /// Probability that a Rogue's Critical Strike lands
    #[serde(default = "default_half_chance")]
    pub critical_strike_chance: f64,
    #[serde(default = "default_double")]
    pub power_strike_multiplier: u32,
    #[serde(default = "default_double")]
    pub fireball_multiplier: u32,
    #[serde(default = "default_triple")]
    pub critical_strike_multiplier: u32,
    /// Flat health restored by a Cleric's Heal
    #[serde(default = "default_heal_amount")]
    pub heal_amount: u32,
    /// Rounds, counting the round of use, before the ability can be used again.
    /// 0 and 1 both mean the ability is ready every round.
    #[serde(default)]
    pub ability_cooldown_turns: u32,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            defense_divisor: 4,
            min_damage: 1,
            escape_chance: 0.5,
            critical_strike_chance: 0.5,
            power_strike_multiplier: 2,
            fireball_multiplier: 2,
            critical_strike_multiplier: 3,
            heal_amount: 30,
            ability_cooldown_turns: 0,
        }
    }
}

fn default_defense_divisor() -> u32 {
    4
}
fn default_min_damage() -> u32 {
    1
}
fn default_half_chance() -> f64 {
    0.5
}
fn default_double() -> u32 {
    2
}
fn default_triple() -> u32 {
    3
}
fn default_heal_amount() -> u32 {
    30
}

/// Level-up and economy tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConstants {
    /// Experience needed per level: a level-up happens while xp >= level * xp_per_level
    #[serde(default = "default_xp_per_level")]
    pub xp_per_level: u32,
    #[serde(default = "default_health_per_level")]
    pub health_per_level: u32,
    #[serde(default = "default_stat_per_level")]
    pub strength_per_level: u32,
    #[serde(default = "default_stat_per_level")]
    pub magic_per_level: u32,
    #[serde(default = "default_starting_gold")]
    pub starting_gold: u32,
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            xp_per_level: 100,
            health_per_level: 10,
            strength_per_level: 2,
            magic_per_level: 2,
            starting_gold: 100,
        }
    }
}

fn default_xp_per_level() -> u32 {
    100
}
fn default_health_per_level() -> u32 {
    10
}
fn default_stat_per_level() -> u32 {
    2
}
fn default_starting_gold() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert_eq!(constants.combat.defense_divisor, 4);
        assert_eq!(constants.combat.heal_amount, 30);
        assert!((constants.combat.escape_chance - 0.5).abs() < f64::EPSILON);
        assert_eq!(constants.progression.starting_gold, 100);
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[combat]
defense_divisor = 4
min_damage = 1
escape_chance = 0.25
critical_strike_chance = 0.5
heal_amount = 40
ability_cooldown_turns = 3

[progression]
xp_per_level = 150
"#;

        let constants = GameConstants::parse(toml).unwrap();
        assert!((constants.combat.escape_chance - 0.25).abs() < f64::EPSILON);
        assert_eq!(constants.combat.heal_amount, 40);
        assert_eq!(constants.combat.ability_cooldown_turns, 3);
        // Omitted fields fall back to defaults
        assert_eq!(constants.combat.power_strike_multiplier, 2);
        assert_eq!(constants.progression.xp_per_level, 150);
        assert_eq!(constants.progression.health_per_level, 10);
    }

    #[test]
    fn test_shipped_constants_match_defaults() {
        let toml = include_str!("../../config/constants.toml");
        let constants = GameConstants::parse(toml).unwrap();
        assert_eq!(constants, GameConstants::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let constants = GameConstants::parse("").unwrap();
        assert_eq!(constants, GameConstants::default());
    }

    #[test]
    fn test_rejects_zero_divisor() {
        let result = GameConstants::parse("[combat]\ndefense_divisor = 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_out_of_range_chance() {
        let result = GameConstants::parse("[combat]\nescape_chance = 1.5\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
