//! Enemy record - created fresh for every battle

use super::Combatant;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    /// Granted to the character only if this enemy is brought to 0 health
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    /// Create an enemy at full health (max_health copies health)
    pub fn new(
        name: impl Into<String>,
        health: u32,
        strength: u32,
        magic: u32,
        xp_reward: u32,
        gold_reward: u32,
    ) -> Self {
        Enemy {
            name: name.into(),
            health,
            max_health: health,
            strength,
            magic,
            xp_reward,
            gold_reward,
        }
    }
}

impl Combatant for Enemy {
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
