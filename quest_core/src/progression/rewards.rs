//! Applying battle rewards to a character

use super::Progression;
use crate::combat::BattleOutcome;
use crate::combatant::Character;
use crate::error::{GameError, Result};

/// Grant the experience and gold of a won battle
///
/// Defeats and escapes grant nothing. Returns the number of level-ups.
/// A dead character receives nothing and gets `CharacterDead`.
pub fn apply_battle_rewards(
    progression: &Progression,
    character: &mut Character,
    outcome: &BattleOutcome,
) -> Result<u32> {
    if !outcome.is_victory() {
        return Ok(0);
    }
    if super::is_dead(character) {
        return Err(GameError::CharacterDead(character.name.clone()));
    }
    character.gold = character.gold.saturating_add(outcome.gold_gained);
    progression.gain_experience(character, outcome.xp_gained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::create_character;

    #[test]
    fn test_victory_rewards() {
        let progression = Progression::default();
        let mut hero = create_character("Hero", "Warrior").unwrap();
        let outcome = BattleOutcome::victory(120, 10, 4, Vec::new());

        let level_ups = apply_battle_rewards(&progression, &mut hero, &outcome).unwrap();

        assert_eq!(level_ups, 1);
        assert_eq!(hero.gold, 110);
        assert_eq!(hero.experience, 20);
    }

    #[test]
    fn test_escape_and_defeat_grant_nothing() {
        let progression = Progression::default();
        let mut hero = create_character("Hero", "Warrior").unwrap();

        for outcome in [BattleOutcome::escaped(1, Vec::new()), BattleOutcome::defeat(3, Vec::new())] {
            assert_eq!(apply_battle_rewards(&progression, &mut hero, &outcome).unwrap(), 0);
        }
        assert_eq!(hero.gold, 100);
        assert_eq!(hero.experience, 0);
    }

    #[test]
    fn test_dead_victor_gets_nothing() {
        let progression = Progression::default();
        let mut hero = create_character("Hero", "Warrior").unwrap();
        hero.health = 0;
        let outcome = BattleOutcome::victory(25, 10, 1, Vec::new());

        let result = apply_battle_rewards(&progression, &mut hero, &outcome);

        assert!(matches!(result, Err(GameError::CharacterDead(_))));
        assert_eq!(hero.gold, 100);
        assert_eq!(hero.experience, 0);
    }
}
