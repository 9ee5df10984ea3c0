//! Strictly 2048 terminal frontend.
//!
//! Everything around the pure [`strictly_2048`] engine: the session that owns
//! the canonical game state, the injectable best-score store, key bindings,
//! configuration and the ratatui renderer.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_2048::Direction;
//! use strictly_2048_tui::{GameSession, MemoryStore};
//!
//! let mut session = GameSession::new(MemoryStore::new(0), StdRng::seed_from_u64(7));
//! let report = session.apply_move(Direction::Left);
//! assert_eq!(session.score(), report.points);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod session;
mod store;
mod terminal;
mod ui;

// Crate-level exports - Application
pub use app::{App, Flow};

// Crate-level exports - CLI
pub use cli::{Cli, Command, CommonArgs};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Input
pub use input::{Command as KeyCommand, KeyBindings};

// Crate-level exports - Logging
pub use logging::{init_file_tracing, init_stderr_tracing};

// Crate-level exports - Session management
pub use session::{GameSession, MoveReport};

// Crate-level exports - Best-score persistence
pub use store::{BestScoreStore, FileStore, MemoryStore, StoreError};

// Crate-level exports - Terminal
pub use terminal::run_tui;
