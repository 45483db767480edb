//! Damage calculation
//!
//! Every hit uses the same shape:
//!
//! damage = max(min_damage, offense * multiplier - defense / defense_divisor)
//!
//! Examples (defaults: min_damage 1, defense_divisor 4):
//! - 15 strength vs 8 strength: 15 - 2 = 13
//! - 0 strength vs 40 strength: floored to 1
//! - Power Strike, 15 strength x2 vs 8 strength: 30 - 2 = 28

use crate::combatant::Combatant;
use crate::config::CombatConstants;

/// Basic attack damage: attacker strength against defender strength
pub fn calculate_damage(
    attacker: &impl Combatant,
    defender: &impl Combatant,
    constants: &CombatConstants,
) -> u32 {
    scaled_damage(attacker.strength(), 1, defender.strength(), constants)
}

/// Damage for an offensive stat scaled by a multiplier, mitigated by a defensive stat
pub fn scaled_damage(offense: u32, multiplier: u32, defense: u32, constants: &CombatConstants) -> u32 {
    let mitigation = defense.checked_div(constants.defense_divisor).unwrap_or(0);
    offense
        .saturating_mul(multiplier)
        .saturating_sub(mitigation)
        .max(constants.min_damage)
}
