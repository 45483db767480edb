//! Application state: main menu and adventure loop

use crate::console::Console;
use anyhow::Result;
use quest_core::persistence::{delete_character, list_saved_characters, load_character, save_character};
use quest_core::progression::{is_dead, revive};
use quest_core::{
    apply_battle_rewards, Battle, BattleResolution, Character, CharacterClass, EnemyCatalog, GameConstants,
    GameError, Progression,
};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

/// Where control goes after an adventure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Quit,
}

pub struct App<R, W> {
    console: Console<R, W>,
    save_dir: PathBuf,
    constants: GameConstants,
    progression: Progression,
    catalog: EnemyCatalog,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, save_dir: PathBuf, constants: GameConstants, catalog: EnemyCatalog) -> Self {
        let progression = Progression::new(constants.progression.clone());
        App {
            console,
            save_dir,
            constants,
            progression,
            catalog,
        }
    }

    /// Run the main menu until the player quits or input ends
    pub fn run(&mut self, rng: &mut impl Rng) -> Result<()> {
        self.console.say("=== Quest Chronicles ===")?;
        loop {
            self.console.say("\n1) New character\n2) Load character\n3) List saves\n4) Delete character\n5) Quit")?;
            let Some(choice) = self.console.prompt("> ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.new_character(rng)?,
                "2" => self.load(rng)?,
                "3" => {
                    self.list()?;
                    Flow::Menu
                }
                "4" => {
                    self.delete()?;
                    Flow::Menu
                }
                "5" | "q" => Flow::Quit,
                _ => {
                    self.console.say("Invalid choice.")?;
                    Flow::Menu
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        self.console.say("Farewell!")?;
        Ok(())
    }

    fn new_character(&mut self, rng: &mut impl Rng) -> Result<Flow> {
        let Some(name) = self.console.prompt("Name: ")? else {
            return Ok(Flow::Quit);
        };
        if name.is_empty() {
            self.console.say("Name cannot be empty.")?;
            return Ok(Flow::Menu);
        }

        let classes: Vec<String> = CharacterClass::all()
            .iter()
            .enumerate()
            .map(|(i, class)| format!("{}) {} ({})", i + 1, class, class.ability_name()))
            .collect();
        self.console.say(&classes.join("\n"))?;
        let Some(answer) = self.console.prompt("Class: ")? else {
            return Ok(Flow::Quit);
        };
        let class_name = class_choice(&answer);

        let character = match self.progression.create_character(&name, class_name) {
            Ok(character) => character,
            Err(err) => {
                self.console.say(&err.to_string())?;
                return Ok(Flow::Menu);
            }
        };
        self.console.say(&format!("Welcome, {}!", character.summary()))?;
        self.save(&character)?;
        self.adventure(character, rng)
    }

    fn load(&mut self, rng: &mut impl Rng) -> Result<Flow> {
        let Some(name) = self.console.prompt("Name: ")? else {
            return Ok(Flow::Quit);
        };
        match load_character(&name, &self.save_dir) {
            Ok(character) => {
                self.console.say(&format!("Welcome back, {}!", character.summary()))?;
                self.adventure(character, rng)
            }
            Err(err) => {
                self.console.say(&err.to_string())?;
                Ok(Flow::Menu)
            }
        }
    }

    fn list(&mut self) -> Result<()> {
        let names = list_saved_characters(&self.save_dir)?;
        if names.is_empty() {
            self.console.say("No saved characters.")?;
        } else {
            self.console.say(&names.join("\n"))?;
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some(name) = self.console.prompt("Name: ")? else {
            return Ok(());
        };
        match delete_character(&name, &self.save_dir) {
            Ok(()) => self.console.say(&format!("Deleted {}.", name))?,
            Err(err) => self.console.say(&err.to_string())?,
        }
        Ok(())
    }

    /// Fight level-appropriate enemies until the player heads back
    fn adventure(&mut self, mut character: Character, rng: &mut impl Rng) -> Result<Flow> {
        loop {
            self.console.say(&format!("\n{}\n1) Fight  2) Back to menu", character.summary()))?;
            let Some(choice) = self.console.prompt("> ")? else {
                return Ok(Flow::Quit);
            };
            match choice.as_str() {
                "1" => {}
                "2" => return Ok(Flow::Menu),
                _ => {
                    self.console.say("Invalid choice.")?;
                    continue;
                }
            }

            if is_dead(&character) {
                revive(&mut character);
                if !is_dead(&character) {
                    self.console.say(&format!(
                        "{} is too weak to fight and is revived with {} HP.",
                        character.name, character.health
                    ))?;
                    self.save(&character)?;
                }
            }

            let mut enemy = self.catalog.enemy_for_level(character.level)?;
            let battle = Battle::with_constants(&mut character, &mut enemy, self.constants.combat.clone())
                .run_with_rng(&mut self.console, rng);
            let outcome = match battle {
                Ok(outcome) => outcome,
                Err(err @ GameError::CharacterDead(_)) => {
                    self.console.say(&err.to_string())?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            self.console.say(&outcome.summary())?;

            let level_ups = apply_battle_rewards(&self.progression, &mut character, &outcome)?;
            if level_ups > 0 {
                self.console.say(&format!("Level up! {} is now level {}.", character.name, character.level))?;
            }
            if outcome.resolution == BattleResolution::EnemyWon && revive(&mut character) {
                self.console.say(&format!("{} is revived with {} HP.", character.name, character.health))?;
            }
            self.save(&character)?;

            if self.console.is_closed() {
                return Ok(Flow::Quit);
            }
        }
    }

    /// A failed save is reported and play continues
    fn save(&mut self, character: &Character) -> Result<()> {
        if let Err(err) = save_character(character, &self.save_dir) {
            warn!(character = %character.name, error = %err, "save failed");
            self.console.say(&format!("Could not save: {}", err))?;
        }
        Ok(())
    }
}

/// Accept either a class name or its menu number
fn class_choice(answer: &str) -> &str {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| CharacterClass::all().get(i))
        .map(CharacterClass::name)
        .unwrap_or(answer)
}
