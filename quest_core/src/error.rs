//! Error types shared by every part of the game

use crate::config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout quest_core
pub type Result<T> = std::result::Result<T, GameError>;

/// Everything that can go wrong while creating, fighting with or saving a character
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid class: {0}")]
    InvalidCharacterClass(String),

    #[error("Character save file not found: {0}")]
    CharacterNotFound(String),

    #[error("Could not read save file: {}", path.display())]
    SaveFileCorrupted {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid save data: {0}")]
    InvalidSaveData(String),

    #[error("{0} is dead")]
    CharacterDead(String),

    #[error("Unknown enemy type: {0}")]
    InvalidTarget(String),

    #[error("Combat is not active")]
    CombatNotActive,

    #[error("{ability} is on cooldown for {turns} more turn(s)")]
    AbilityOnCooldown { ability: String, turns: u32 },

    #[error("Gold cannot be negative (have {current}, change of {change})")]
    InsufficientGold { current: u32, change: i64 },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_message() {
        let err = GameError::AbilityOnCooldown {
            ability: "Power Strike".to_string(),
            turns: 2,
        };
        assert_eq!(err.to_string(), "Power Strike is on cooldown for 2 more turn(s)");
    }

    #[test]
    fn test_corrupted_message_includes_path() {
        let err = GameError::SaveFileCorrupted {
            path: PathBuf::from("saves/Hero_save.txt"),
            source: io::Error::new(io::ErrorKind::InvalidData, "bad bytes"),
        };
        assert!(err.to_string().contains("Hero_save.txt"));
    }
}
