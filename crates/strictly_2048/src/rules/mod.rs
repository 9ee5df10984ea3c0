//! Game rules for 2048.
//!
//! Pure functions over [`Grid`](crate::Grid): the four directional moves,
//! the terminal-state predicate and the win search. Rules hold no state, so
//! the caller evaluates them once per move instead of latching flags inside
//! scanning loops.

pub mod moves;
pub mod terminal;
pub mod win;

pub use moves::{move_down, move_left, move_right, move_up, slide};
pub use terminal::{available_moves, is_terminal};
pub use win::{contains_value, has_won};
