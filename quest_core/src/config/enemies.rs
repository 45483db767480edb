//! Enemy catalog loading

use super::ConfigError;
use crate::catalog::{EnemyCatalog, EnemyTemplate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for enemy templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemiesConfig {
    #[serde(rename = "enemies")]
    pub enemies: Vec<EnemyTemplate>,
}

/// Load the enemy catalog from a TOML file
pub fn load_enemy_catalog(path: &Path) -> Result<EnemyCatalog, ConfigError> {
    let config: EnemiesConfig = super::load_toml(path)?;
    build_catalog(config)
}

/// Load the enemy catalog from a TOML string
pub fn parse_enemy_catalog(content: &str) -> Result<EnemyCatalog, ConfigError> {
    let config: EnemiesConfig = super::parse_toml(content)?;
    build_catalog(config)
}

fn build_catalog(config: EnemiesConfig) -> Result<EnemyCatalog, ConfigError> {
    let mut catalog = EnemyCatalog::new();
    for template in config.enemies {
        if template.health == 0 {
            return Err(ConfigError::ValidationError(format!(
                "enemy '{}' must start with positive health",
                template.id
            )));
        }
        catalog.register(template);
    }
    Ok(catalog)
}

/// Get the built-in enemy catalog
pub fn default_enemy_catalog() -> EnemyCatalog {
    let toml = include_str!("../../config/enemies.toml");
    parse_enemy_catalog(toml).unwrap_or_else(|_| {
        let mut catalog = EnemyCatalog::new();
        catalog.register(EnemyTemplate::goblin());
        catalog
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enemies() {
        let toml = r#"
[[enemies]]
id = "slime"
name = "Slime"
health = 20
strength = 3
magic = 0
xp_reward = 5
gold_reward = 1
min_level = 1
"#;

        let catalog = parse_enemy_catalog(toml).unwrap();
        let slime = catalog.get("slime").unwrap();
        assert_eq!(slime.name, "Slime");
        assert_eq!(slime.health, 20);
    }

    #[test]
    fn test_zero_health_enemy_rejected() {
        let toml = r#"
[[enemies]]
id = "ghost"
name = "Ghost"
health = 0
strength = 3
magic = 0
xp_reward = 5
gold_reward = 1
"#;

        let result = parse_enemy_catalog(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_default_catalog_loads_all() {
        let catalog = default_enemy_catalog();
        assert_eq!(catalog.len(), 3, "Expected 3 enemies from config");

        for id in ["goblin", "orc", "dragon"] {
            assert!(catalog.get(id).is_some(), "Missing enemy: {}", id);
        }
    }
}
