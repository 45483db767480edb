//! Combat - the turn-based battle state machine

mod action;
mod battle;
mod interface;
mod outcome;

pub use action::PlayerAction;
pub use battle::{Battle, BattleState};
pub use interface::BattleInterface;
pub use outcome::{BattleOutcome, BattleResolution};
