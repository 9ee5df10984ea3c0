//! Strictly 2048 - Unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_2048_tui::{
    App, BestScoreStore, Cli, Command, CommonArgs, FileStore, GameConfig, GameSession,
    KeyBindings, MemoryStore, init_file_tracing, init_stderr_tracing, run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(Command::default_play) {
        Command::Play {
            common,
            seed,
            no_save,
        } => run_play(common, seed, no_save),
        Command::Best { common } => run_best(common),
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(common: &CommonArgs) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&common.config)
        .with_context(|| format!("Failed to load {}", common.config.display()))?;
    if let Some(path) = &common.score_file {
        config = config.with_score_file(path.clone());
    }
    Ok(config)
}

/// Run the terminal game
fn run_play(common: CommonArgs, seed: Option<u64>, no_save: bool) -> Result<()> {
    let mut config = load_config(&common)?;
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    init_file_tracing(config.log_file())?;
    info!(?config, no_save, "Configuration resolved");

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let store: Box<dyn BestScoreStore> = if no_save {
        Box::new(MemoryStore::default())
    } else {
        Box::new(FileStore::new(config.score_file().clone()))
    };

    let session = GameSession::new(store, rng);
    let app = App::new(session, KeyBindings::standard());
    run_tui(app)
}

/// Print the stored best score
#[instrument(skip(common))]
fn run_best(common: CommonArgs) -> Result<()> {
    init_stderr_tracing();

    let config = load_config(&common)?;
    let store = FileStore::new(config.score_file().clone());
    let best = store
        .load_best_score()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    println!("{}", best);
    Ok(())
}
