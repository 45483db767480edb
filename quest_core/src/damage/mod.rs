//! Damage system - basic attacks and class special abilities

mod ability;
mod calculation;

pub use ability::{use_special_ability, AbilityEffect, EffectKind};
pub use calculation::{calculate_damage, scaled_damage};
