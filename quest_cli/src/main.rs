//! quest - terminal front end for Quest Chronicles
//!
//! Usage: `quest [save_dir]`. Set `QUEST_CONFIG` to a TOML file to override
//! the combat and progression constants, and `RUST_LOG` for diagnostics.

mod app;
mod console;

use anyhow::{Context, Result};
use app::App;
use console::Console;
use quest_core::persistence::DEFAULT_SAVE_DIR;
use quest_core::{default_enemy_catalog, GameConstants};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let save_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_DIR));

    let constants = match std::env::var_os("QUEST_CONFIG") {
        Some(path) => {
            let path = Path::new(&path);
            GameConstants::load(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => GameConstants::default(),
    };
    tracing::info!(save_dir = %save_dir.display(), "starting");

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut app = App::new(console, save_dir, constants, default_enemy_catalog());
    app.run(&mut rand::thread_rng())
}
