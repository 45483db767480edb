//! Persistence - character save files on disk
//!
//! Each character lives in `<dir>/<name>_save.txt`. Saves rewrite the whole
//! file; a failed save should be treated as not having happened.

mod format;

pub use format::{check_save_name, parse_save_string, to_save_string, validate_character};

use crate::combatant::Character;
use crate::error::{GameError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default location for save files, relative to the working directory
pub const DEFAULT_SAVE_DIR: &str = "data/save_games";

const SAVE_SUFFIX: &str = "_save.txt";

/// Path of the save file for a character name
pub fn save_path(name: &str, save_dir: &Path) -> PathBuf {
    save_dir.join(format!("{}{}", name, SAVE_SUFFIX))
}

/// Write a character to its save file, creating the directory if needed
pub fn save_character(character: &Character, save_dir: &Path) -> Result<PathBuf> {
    validate_character(character)?;
    fs::create_dir_all(save_dir)?;

    let path = save_path(&character.name, save_dir);
    fs::write(&path, to_save_string(character))?;
    info!(character = %character.name, path = %path.display(), "character saved");
    Ok(path)
}

/// Read a character back from its save file
pub fn load_character(name: &str, save_dir: &Path) -> Result<Character> {
    check_save_name(name)?;
    if !save_dir.is_dir() {
        return Err(GameError::CharacterNotFound(save_dir.display().to_string()));
    }
    let path = save_path(name, save_dir);
    if !path.is_file() {
        return Err(GameError::CharacterNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(&path).map_err(|source| GameError::SaveFileCorrupted {
        path: path.clone(),
        source,
    })?;
    parse_save_string(&content)
}

/// Names of every saved character, sorted. A missing directory has none.
pub fn list_saved_characters(save_dir: &Path) -> Result<Vec<String>> {
    if !save_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(save_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if let Some(name) = file_name.strip_suffix(SAVE_SUFFIX) {
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Remove a character's save file
pub fn delete_character(name: &str, save_dir: &Path) -> Result<()> {
    check_save_name(name)?;
    let path = save_path(name, save_dir);
    if !path.is_file() {
        return Err(GameError::CharacterNotFound(path.display().to_string()));
    }
    fs::remove_file(&path)?;
    info!(character = %name, "character deleted");
    Ok(())
}
