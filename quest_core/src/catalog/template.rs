//! EnemyTemplate - base stats for one enemy type

use crate::combatant::Enemy;
use serde::{Deserialize, Serialize};

/// Base stats for an enemy type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Lookup key (e.g., "goblin")
    pub id: String,
    /// Display name
    pub name: String,
    pub health: u32,
    pub strength: u32,
    pub magic: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
    /// Lowest character level this template is chosen for
    #[serde(default = "default_min_level")]
    pub min_level: u32,
}

fn default_min_level() -> u32 {
    1
}

impl EnemyTemplate {
    /// The weakest tier, used when no catalog file can be parsed
    pub fn goblin() -> Self {
        EnemyTemplate {
            id: "goblin".to_string(),
            name: "Goblin".to_string(),
            health: 50,
            strength: 8,
            magic: 2,
            xp_reward: 25,
            gold_reward: 10,
            min_level: 1,
        }
    }

    /// Spawn a fresh enemy at full health
    pub fn spawn(&self) -> Enemy {
        Enemy::new(
            self.name.clone(),
            self.health,
            self.strength,
            self.magic,
            self.xp_reward,
            self.gold_reward,
        )
    }
}
