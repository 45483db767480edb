//! Combatant records - characters and enemies

mod character;
mod class;
mod enemy;

pub use character::Character;
pub use class::{CharacterClass, ClassBaseStats};
pub use enemy::Enemy;

/// Anything that can take part in a battle
///
/// Health is unsigned, so damage can never push it below zero, and healing is
/// clamped to `max_health`.
pub trait Combatant {
    fn name(&self) -> &str;
    fn health(&self) -> u32;
    fn max_health(&self) -> u32;
    fn strength(&self) -> u32;
    fn magic(&self) -> u32;

    /// Overwrite current health (clamped to max_health)
    fn set_health(&mut self, health: u32);

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Subtract damage, stopping at 0. Returns the remaining health.
    fn apply_damage(&mut self, damage: u32) -> u32 {
        let remaining = self.health().saturating_sub(damage);
        self.set_health(remaining);
        remaining
    }

    /// Restore health up to max_health. Returns the amount actually restored.
    fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health();
        let after = before.saturating_add(amount).min(self.max_health());
        self.set_health(after);
        after.saturating_sub(before)
    }
}
