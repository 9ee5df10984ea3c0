//! Strictly 2048 - pure grid engine for the sliding-tile merging puzzle.
//!
//! The engine is stateless: every operation takes a [`Grid`] and returns a
//! new value. The caller owns the game session (score, best score, win and
//! game-over flags) and decides what to persist.
//!
//! # Architecture
//!
//! - **Types**: [`Grid`], [`Direction`], [`MoveOutcome`], [`LineOutcome`]
//! - **Line**: [`compact_and_merge_line`], the single-line slide all moves reduce to
//! - **Rules**: directional moves, [`is_terminal`], [`contains_value`]
//! - **Spawn**: [`initialize_grid`], [`spawn_random_tile`] (the only randomness)
//! - **Invariants**: grid properties and the move contract, checked in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_2048::{Direction, Grid, slide};
//!
//! let grid = Grid::from_rows([
//!     [2, 2, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]);
//! let outcome = slide(&grid, Direction::Left);
//! assert!(outcome.moved);
//! assert_eq!(outcome.points, 4);
//! assert_eq!(outcome.grid.row(0), [4, 0, 0, 0]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod invariants;
mod kani_support;
mod line;
mod rules;
mod spawn;
mod types;

// Crate-level exports - Core types
pub use types::{Direction, Grid, Line, MoveOutcome, Score, Tile, GRID_SIZE, WIN_TILE};

// Crate-level exports - Line compaction
pub use line::{LineOutcome, compact_and_merge_line};

// Crate-level exports - Rules
pub use rules::{
    available_moves, contains_value, has_won, is_terminal, move_down, move_left, move_right,
    move_up, slide,
};

// Crate-level exports - Spawning
pub use spawn::{initialize_grid, spawn_random_tile};

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantViolation, MoveContract, PowerOfTwoTiles, assert_grid_invariants,
};
