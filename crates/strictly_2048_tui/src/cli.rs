//! Command-line interface for strictly_2048.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Strictly 2048 - slide and merge tiles in your terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "The 2048 sliding-tile puzzle in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Shared options
        #[command(flatten)]
        common: CommonArgs,

        /// Fixed RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,

        /// Keep the best score in memory only
        #[arg(long)]
        no_save: bool,
    },

    /// Print the stored best score
    Best {
        /// Shared options
        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the best-score file from the config
    #[arg(long)]
    pub score_file: Option<PathBuf>,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            score_file: None,
        }
    }
}

impl Command {
    /// `play` with every option at its default.
    pub fn default_play() -> Self {
        Command::Play {
            common: CommonArgs::default(),
            seed: None,
            no_save: false,
        }
    }
}
