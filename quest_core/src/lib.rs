//! quest_core - Core combat and character library for Quest Chronicles
//!
//! This library provides:
//! - Character / Enemy: combatant records mutated in place by battles
//! - Battle: turn-based combat state machine producing a BattleOutcome
//! - EnemyCatalog: enemy templates and level banding
//! - Progression: experience, level-ups, gold and revival
//! - Persistence: line-oriented character save files

pub mod catalog;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod error;
pub mod persistence;
pub mod prelude;
pub mod progression;

// Re-export core types for convenience
pub use catalog::{EnemyCatalog, EnemyTemplate};
pub use combat::{Battle, BattleInterface, BattleOutcome, BattleResolution, BattleState, PlayerAction};
pub use combatant::{Character, CharacterClass, Combatant, Enemy};
pub use config::{default_enemy_catalog, CombatConstants, GameConstants, ProgressionConstants};
pub use damage::{calculate_damage, use_special_ability, AbilityEffect, EffectKind};
pub use error::{GameError, Result};
pub use persistence::{delete_character, list_saved_characters, load_character, save_character};
pub use progression::{apply_battle_rewards, Progression};
