//! BattleOutcome - terminal report of a battle

use serde::{Deserialize, Serialize};

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleResolution {
    /// The enemy reached 0 health
    PlayerWon,
    /// The character reached 0 health
    EnemyWon,
    /// The character ran away. Not a defeat, but earns nothing.
    Escaped,
}

/// Result of a finished battle
///
/// Rewards are reported, never applied: the caller hands them to progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub resolution: BattleResolution,
    pub xp_gained: u32,
    pub gold_gained: u32,
    /// Rounds started, including the final one
    pub turns: u32,
    /// Every log line produced during the battle
    #[serde(default)]
    pub log: Vec<String>,
}

impl BattleOutcome {
    pub fn victory(xp_gained: u32, gold_gained: u32, turns: u32, log: Vec<String>) -> Self {
        BattleOutcome {
            resolution: BattleResolution::PlayerWon,
            xp_gained,
            gold_gained,
            turns,
            log,
        }
    }

    pub fn defeat(turns: u32, log: Vec<String>) -> Self {
        BattleOutcome {
            resolution: BattleResolution::EnemyWon,
            xp_gained: 0,
            gold_gained: 0,
            turns,
            log,
        }
    }

    pub fn escaped(turns: u32, log: Vec<String>) -> Self {
        BattleOutcome {
            resolution: BattleResolution::Escaped,
            xp_gained: 0,
            gold_gained: 0,
            turns,
            log,
        }
    }

    pub fn is_victory(&self) -> bool {
        self.resolution == BattleResolution::PlayerWon
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        match self.resolution {
            BattleResolution::PlayerWon => format!(
                "Victory after {} turn(s)! Gained {} XP and {} gold",
                self.turns, self.xp_gained, self.gold_gained
            ),
            BattleResolution::EnemyWon => format!("Defeated after {} turn(s)", self.turns),
            BattleResolution::Escaped => format!("Escaped after {} turn(s)", self.turns),
        }
    }
}
