//! Battle - turn loop between one character and one enemy
//!
//! A round is: show stats, one player action, end check, enemy basic attack,
//! end check. The battle holds exclusive borrows of both records for its whole
//! lifetime and mutates their health in place.

use super::{BattleInterface, BattleOutcome, BattleResolution, PlayerAction};
use crate::combatant::{Character, Combatant, Enemy};
use crate::config::CombatConstants;
use crate::damage::{calculate_damage, use_special_ability, AbilityEffect, EffectKind};
use crate::error::{GameError, Result};
use rand::Rng;
use tracing::{debug, info, warn};

/// Lifecycle of a battle. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    NotStarted,
    Active,
    Ended,
}

pub struct Battle<'a> {
    character: &'a mut Character,
    enemy: &'a mut Enemy,
    constants: CombatConstants,
    state: BattleState,
    turn: u32,
    escaped: bool,
    log: Vec<String>,
    /// Log lines already passed to the interface
    shown: usize,
}

impl<'a> Battle<'a> {
    /// Create a battle using the default combat constants
    pub fn new(character: &'a mut Character, enemy: &'a mut Enemy) -> Self {
        Self::with_constants(character, enemy, CombatConstants::default())
    }

    pub fn with_constants(
        character: &'a mut Character,
        enemy: &'a mut Enemy,
        constants: CombatConstants,
    ) -> Self {
        Battle {
            character,
            enemy,
            constants,
            state: BattleState::NotStarted,
            turn: 0,
            escaped: false,
            log: Vec::new(),
            shown: 0,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Current round number (0 before the battle starts)
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn character(&self) -> &Character {
        &*self.character
    }

    pub fn enemy(&self) -> &Enemy {
        &*self.enemy
    }

    /// Move from `NotStarted` to `Active`
    ///
    /// Fails with `CharacterDead` if the character has no health left, and with
    /// `CombatNotActive` if this battle was already started. Nothing is mutated
    /// on failure.
    pub fn start(&mut self) -> Result<()> {
        if self.state != BattleState::NotStarted {
            return Err(GameError::CombatNotActive);
        }
        if !self.character.is_alive() {
            return Err(GameError::CharacterDead(self.character.name.clone()));
        }

        self.state = BattleState::Active;
        self.turn = 1;
        info!(
            character = %self.character.name,
            enemy = %self.enemy.name,
            "battle started"
        );
        self.record(format!("{} encounters {}!", self.character.name, self.enemy.name));
        Ok(())
    }

    /// Run the whole battle with the thread RNG
    pub fn run(&mut self, ui: &mut impl BattleInterface) -> Result<BattleOutcome> {
        let mut rng = rand::thread_rng();
        self.run_with_rng(ui, &mut rng)
    }

    /// Run the whole battle with a provided RNG (for deterministic testing)
    pub fn run_with_rng(
        &mut self,
        ui: &mut impl BattleInterface,
        rng: &mut impl Rng,
    ) -> Result<BattleOutcome> {
        self.start()?;
        self.flush_log(ui);

        while self.state == BattleState::Active {
            ui.show_stats(&*self.character, &*self.enemy, self.turn);

            let action = ui.choose_action(&*self.character, &*self.enemy);
            self.player_turn(action, rng)?;
            self.flush_log(ui);
            if self.check_battle_end() {
                break;
            }

            self.enemy_turn()?;
            self.flush_log(ui);
            if self.check_battle_end() {
                break;
            }

            self.character.tick_ability_cooldown();
            self.turn += 1;
        }

        let outcome = self.conclude();
        self.flush_log(ui);
        Ok(outcome)
    }

    /// Resolve exactly one player action
    ///
    /// An ability on cooldown is reported in the log and still spends the turn.
    pub fn player_turn(&mut self, action: PlayerAction, rng: &mut impl Rng) -> Result<()> {
        self.ensure_active()?;
        debug!(turn = self.turn, ?action, "player action");

        match action {
            PlayerAction::Attack => {
                let damage = calculate_damage(&*self.character, &*self.enemy, &self.constants);
                self.enemy.apply_damage(damage);
                self.record(format!(
                    "{} attacks {} for {} damage!",
                    self.character.name, self.enemy.name, damage
                ));
            }
            PlayerAction::SpecialAbility => {
                match use_special_ability(&*self.character, &*self.enemy, &self.constants, rng) {
                    Ok(effect) => {
                        self.apply_ability(effect);
                        self.character.ability_cooldown = self.constants.ability_cooldown_turns;
                    }
                    Err(err @ GameError::AbilityOnCooldown { .. }) => {
                        warn!(character = %self.character.name, "{}", err);
                        self.record(err.to_string());
                    }
                    Err(err) => return Err(err),
                }
            }
            PlayerAction::Escape => {
                if self.attempt_escape(rng)? {
                    self.record(format!("{} escaped from {}!", self.character.name, self.enemy.name));
                } else {
                    self.record(format!("{} failed to escape!", self.character.name));
                }
            }
        }
        Ok(())
    }

    /// The enemy always performs a basic attack
    pub fn enemy_turn(&mut self) -> Result<()> {
        self.ensure_active()?;
        let damage = calculate_damage(&*self.enemy, &*self.character, &self.constants);
        self.character.apply_damage(damage);
        self.record(format!(
            "{} attacks {} for {} damage!",
            self.enemy.name, self.character.name, damage
        ));
        Ok(())
    }

    /// Roll to flee. On success the battle ends immediately.
    pub fn attempt_escape(&mut self, rng: &mut impl Rng) -> Result<bool> {
        self.ensure_active()?;
        if rng.gen::<f64>() < self.constants.escape_chance {
            self.escaped = true;
            self.state = BattleState::Ended;
            return Ok(true);
        }
        Ok(false)
    }

    /// End the battle if either side is at 0 health. Returns true once ended.
    pub fn check_battle_end(&mut self) -> bool {
        if self.state == BattleState::Ended {
            return true;
        }
        if !self.enemy.is_alive() || !self.character.is_alive() {
            self.state = BattleState::Ended;
            return true;
        }
        false
    }

    fn apply_ability(&mut self, effect: AbilityEffect) {
        match effect.kind {
            EffectKind::Damage(damage) => {
                self.enemy.apply_damage(damage);
            }
            EffectKind::Heal(amount) => {
                self.character.heal(amount);
            }
            EffectKind::Miss => {}
        }
        self.record(effect.description);
    }

    /// Build the outcome from final health. The enemy is checked first, so a
    /// round where both sides reach 0 counts as a player victory.
    fn conclude(&mut self) -> BattleOutcome {
        self.state = BattleState::Ended;
        self.character.ability_cooldown = 0;

        let resolution = if !self.enemy.is_alive() {
            BattleResolution::PlayerWon
        } else if self.escaped {
            BattleResolution::Escaped
        } else {
            BattleResolution::EnemyWon
        };

        match resolution {
            BattleResolution::PlayerWon => self.record(format!("{} is defeated!", self.enemy.name)),
            BattleResolution::EnemyWon => self.record(format!("{} has fallen!", self.character.name)),
            BattleResolution::Escaped => {}
        }

        let log = self.log.clone();
        let outcome = match resolution {
            BattleResolution::PlayerWon => {
                BattleOutcome::victory(self.enemy.xp_reward, self.enemy.gold_reward, self.turn, log)
            }
            BattleResolution::EnemyWon => BattleOutcome::defeat(self.turn, log),
            BattleResolution::Escaped => BattleOutcome::escaped(self.turn, log),
        };

        info!(
            character = %self.character.name,
            enemy = %self.enemy.name,
            resolution = ?outcome.resolution,
            turns = outcome.turns,
            "battle ended"
        );
        outcome
    }

    fn ensure_active(&self) -> Result<()> {
        if self.state != BattleState::Active {
            return Err(GameError::CombatNotActive);
        }
        Ok(())
    }

    fn record(&mut self, message: String) {
        debug!(turn = self.turn, "{}", message);
        self.log.push(message);
    }

    fn flush_log(&mut self, ui: &mut impl BattleInterface) {
        for message in &self.log[self.shown..] {
            ui.show_message(message);
        }
        self.shown = self.log.len();
    }
}
