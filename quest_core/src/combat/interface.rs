//! BattleInterface - how a battle talks to whoever is playing it

use super::PlayerAction;
use crate::combatant::{Character, Enemy};

/// Input and display seam for a running battle
///
/// `choose_action` is the only point where a battle waits on the outside world.
pub trait BattleInterface {
    /// Pick the player's action for this round
    fn choose_action(&mut self, character: &Character, enemy: &Enemy) -> PlayerAction;

    /// Called at the start of every round
    fn show_stats(&mut self, _character: &Character, _enemy: &Enemy, _turn: u32) {}

    /// Called for every battle log line as it happens
    fn show_message(&mut self, _message: &str) {}
}
