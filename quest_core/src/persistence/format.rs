//! Save file format
//!
//! One `KEY: value` pair per line, in a fixed order:
//!
//! ```text
//! NAME: Hero
//! CLASS: Warrior
//! LEVEL: 1
//! HEALTH: 120
//! MAX_HEALTH: 120
//! STRENGTH: 15
//! MAGIC: 5
//! EXPERIENCE: 0
//! GOLD: 100
//! INVENTORY: Health Potion,Rope
//! ACTIVE_QUESTS:
//! COMPLETED_QUESTS:
//! ```
//!
//! List values are comma-joined with no escaping, so an entry containing a comma
//! comes back as two entries.

use crate::combatant::{Character, CharacterClass};
use crate::error::{GameError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Serialize a character to save file text
pub fn to_save_string(character: &Character) -> String {
    let lines = [
        format!("NAME: {}", character.name),
        format!("CLASS: {}", character.class),
        format!("LEVEL: {}", character.level),
        format!("HEALTH: {}", character.health),
        format!("MAX_HEALTH: {}", character.max_health),
        format!("STRENGTH: {}", character.strength),
        format!("MAGIC: {}", character.magic),
        format!("EXPERIENCE: {}", character.experience),
        format!("GOLD: {}", character.gold),
        format!("INVENTORY: {}", character.inventory.join(",")),
        format!("ACTIVE_QUESTS: {}", character.active_quests.join(",")),
        format!("COMPLETED_QUESTS: {}", character.completed_quests.join(",")),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Parse save file text back into a validated character
pub fn parse_save_string(content: &str) -> Result<Character> {
    let fields = Fields::parse(content)?;

    let class_name = fields.text("CLASS")?;
    let class: CharacterClass = class_name
        .parse()
        .map_err(|_| GameError::InvalidSaveData(format!("unknown class '{}'", class_name)))?;

    let character = Character {
        name: fields.text("NAME")?.to_string(),
        class,
        level: fields.number("LEVEL")?,
        experience: fields.number("EXPERIENCE")?,
        gold: fields.number("GOLD")?,
        health: fields.number("HEALTH")?,
        max_health: fields.number("MAX_HEALTH")?,
        strength: fields.number("STRENGTH")?,
        magic: fields.number("MAGIC")?,
        inventory: fields.list("INVENTORY")?,
        active_quests: fields.list("ACTIVE_QUESTS")?,
        completed_quests: fields.list("COMPLETED_QUESTS")?,
        ability_cooldown: 0,
    };

    validate_character(&character)?;
    Ok(character)
}

/// Check that a character record is internally consistent
pub fn validate_character(character: &Character) -> Result<()> {
    check_save_name(&character.name)?;
    if character.level < 1 {
        return Err(GameError::InvalidSaveData("invalid level value".to_string()));
    }
    if character.max_health < 1 {
        return Err(GameError::InvalidSaveData("invalid max_health value".to_string()));
    }
    if character.health > character.max_health {
        return Err(GameError::InvalidSaveData(format!(
            "health {} exceeds max_health {}",
            character.health, character.max_health
        )));
    }
    Ok(())
}

/// A save name must stay a single file name inside the save directory
pub fn check_save_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GameError::InvalidSaveData("name must not be empty".to_string()));
    }
    if name.contains(['/', '\\', '\n', '\r']) {
        return Err(GameError::InvalidSaveData(format!("invalid character name '{}'", name)));
    }
    Ok(())
}

/// Raw key/value pairs read from a save file
struct Fields(HashMap<String, String>);

impl Fields {
    fn parse(content: &str) -> Result<Self> {
        let mut fields = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| GameError::InvalidSaveData(format!("invalid line in save file: {}", line)))?;
            let key = key.trim();
            if !KNOWN_KEYS.contains(&key) {
                debug!(key, "ignoring unknown save file key");
            }
            fields.insert(key.to_string(), value.trim().to_string());
        }
        Ok(Fields(fields))
    }

    fn text(&self, key: &str) -> Result<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| GameError::InvalidSaveData(format!("missing field: {}", key)))
    }

    fn number(&self, key: &str) -> Result<u32> {
        let value = self.text(key)?;
        value
            .parse()
            .map_err(|_| GameError::InvalidSaveData(format!("{} is not a valid number: '{}'", key, value)))
    }

    /// An empty value is an empty list, not a list holding one empty string
    fn list(&self, key: &str) -> Result<Vec<String>> {
        let value = self.text(key)?;
        if value.is_empty() {
            return Ok(Vec::new());
        }
        Ok(value.split(',').map(str::to_string).collect())
    }
}

const KNOWN_KEYS: [&str; 12] = [
    "NAME",
    "CLASS",
    "LEVEL",
    "HEALTH",
    "MAX_HEALTH",
    "STRENGTH",
    "MAGIC",
    "EXPERIENCE",
    "GOLD",
    "INVENTORY",
    "ACTIVE_QUESTS",
    "COMPLETED_QUESTS",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Character {
        let mut hero = Character::new("Hero", CharacterClass::Warrior);
        hero.gold = 100;
        hero.inventory = vec!["Health Potion".to_string(), "Rope".to_string()];
        hero.completed_quests = vec!["Rat Problem".to_string()];
        hero
    }

    #[test]
    fn test_field_order() {
        let text = to_save_string(&sample());
        let keys: Vec<&str> = text
            .lines()
            .map(|line| line.split_once(':').unwrap().0)
            .collect();
        assert_eq!(keys, KNOWN_KEYS);
    }

    #[test]
    fn test_lists_are_comma_joined() {
        let text = to_save_string(&sample());
        assert!(text.contains("INVENTORY: Health Potion,Rope\n"));
        assert!(text.contains("ACTIVE_QUESTS: \n"));
    }

    #[test]
    fn test_parse_written_text() {
        let mut hero = sample();
        hero.ability_cooldown = 3;
        let parsed = parse_save_string(&to_save_string(&hero)).unwrap();

        assert_eq!(parsed.name, "Hero");
        assert_eq!(parsed.inventory, hero.inventory);
        assert!(parsed.active_quests.is_empty());
        // Cooldown is never persisted
        assert_eq!(parsed.ability_cooldown, 0);
    }

    #[test]
    fn test_value_may_contain_colon() {
        let mut hero = sample();
        hero.inventory = vec!["Map: North".to_string()];
        let parsed = parse_save_string(&to_save_string(&hero)).unwrap();
        assert_eq!(parsed.inventory, vec!["Map: North".to_string()]);
    }

    #[test]
    fn test_comma_in_item_splits_on_reload() {
        let mut hero = sample();
        hero.inventory = vec!["Bread, stale".to_string()];
        let parsed = parse_save_string(&to_save_string(&hero)).unwrap();
        assert_eq!(parsed.inventory.len(), 2);
    }

    #[test]
    fn test_line_without_colon() {
        let text = to_save_string(&sample()) + "garbage\n";
        let err = parse_save_string(&text).unwrap_err();
        assert!(matches!(err, GameError::InvalidSaveData(msg) if msg.contains("garbage")));
    }

    #[test]
    fn test_bad_number() {
        let text = to_save_string(&sample()).replace("LEVEL: 1", "LEVEL: one");
        assert!(matches!(parse_save_string(&text), Err(GameError::InvalidSaveData(_))));
    }

    #[test]
    fn test_missing_field() {
        let text = to_save_string(&sample()).replace("GOLD: 100\n", "");
        let err = parse_save_string(&text).unwrap_err();
        assert!(matches!(err, GameError::InvalidSaveData(msg) if msg.contains("GOLD")));
    }

    #[test]
    fn test_unknown_class() {
        let text = to_save_string(&sample()).replace("CLASS: Warrior", "CLASS: Bard");
        assert!(matches!(parse_save_string(&text), Err(GameError::InvalidSaveData(_))));
    }

    #[test]
    fn test_check_save_name() {
        assert!(check_save_name("Brom").is_ok());
        assert!(check_save_name("Sir Brom: the Bold").is_ok());
        for name in ["", "../victim", "a/b", "a\\b", "two\nlines"] {
            assert!(
                matches!(check_save_name(name), Err(GameError::InvalidSaveData(_))),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_validate() {
        let mut hero = sample();
        assert!(validate_character(&hero).is_ok());

        hero.health = hero.max_health + 1;
        assert!(validate_character(&hero).is_err());

        let mut hero = sample();
        hero.level = 0;
        assert!(validate_character(&hero).is_err());

        let mut hero = sample();
        hero.name = "../escape".to_string();
        assert!(validate_character(&hero).is_err());
    }
}
