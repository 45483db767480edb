//! Prelude module for convenient imports
//!
//! ```rust
//! use quest_core::prelude::*;
//! ```

// Combatants
pub use crate::combatant::{Character, CharacterClass, Combatant, Enemy};

// Combat
pub use crate::combat::{Battle, BattleInterface, BattleOutcome, BattleResolution, PlayerAction};
pub use crate::damage::{calculate_damage, AbilityEffect, EffectKind};

// Enemies
pub use crate::catalog::EnemyCatalog;

// Progression and saves
pub use crate::persistence::{load_character, save_character};
pub use crate::progression::{apply_battle_rewards, Progression};

// Config
pub use crate::config::{default_enemy_catalog, GameConstants};

// Errors
pub use crate::error::{GameError, Result};
