//! Line-based terminal I/O

use quest_core::{BattleInterface, Character, Combatant, Enemy, PlayerAction};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Prompts on a writer and reads answers line by line
///
/// Once input runs out the console is closed: prompts return `None` and
/// battles fall back to basic attacks so they still finish.
pub struct Console<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Battle output has no error channel, so a failed write is logged
    fn display(&mut self, text: &str) {
        if let Err(err) = self.say(text) {
            warn!(error = %err, "failed to write to console");
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> BattleInterface for Console<R, W> {
    fn choose_action(&mut self, character: &Character, _enemy: &Enemy) -> PlayerAction {
        loop {
            let menu = format!(
                "1) Attack  2) {}  3) Escape",
                character.class.ability_name()
            );
            self.display(&menu);
            match self.prompt("> ") {
                Ok(Some(choice)) => {
                    if let Some(action) = PlayerAction::from_choice(&choice) {
                        return action;
                    }
                    self.display("Invalid choice. Enter 1, 2 or 3.");
                }
                Ok(None) => return PlayerAction::Attack,
                Err(err) => {
                    warn!(error = %err, "console prompt failed, attacking");
                    self.closed = true;
                    return PlayerAction::Attack;
                }
            }
        }
    }

    fn show_stats(&mut self, character: &Character, enemy: &Enemy, turn: u32) {
        let stats = format!(
            "\n--- Turn {} ---\n{}: {}/{} HP\n{}: {}/{} HP",
            turn,
            character.name,
            character.health(),
            character.max_health(),
            enemy.name,
            enemy.health(),
            enemy.max_health()
        );
        self.display(&stats);
    }

    fn show_message(&mut self, message: &str) {
        self.display(message);
    }
}
