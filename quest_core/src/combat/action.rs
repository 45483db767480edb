//! Player actions

use serde::{Deserialize, Serialize};
use std::fmt;

/// The one action a player takes each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    Attack,
    SpecialAbility,
    Escape,
}

impl PlayerAction {
    pub fn all() -> &'static [PlayerAction] {
        &[PlayerAction::Attack, PlayerAction::SpecialAbility, PlayerAction::Escape]
    }

    /// Menu key for this action ("1", "2" or "3")
    pub fn key(&self) -> char {
        match self {
            PlayerAction::Attack => '1',
            PlayerAction::SpecialAbility => '2',
            PlayerAction::Escape => '3',
        }
    }

    /// Parse a menu choice, ignoring surrounding whitespace
    pub fn from_choice(choice: &str) -> Option<Self> {
        let mut chars = choice.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        PlayerAction::all().iter().copied().find(|action| action.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Attack => "Basic Attack",
            PlayerAction::SpecialAbility => "Special Ability",
            PlayerAction::Escape => "Try to Run",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
