//! Terminal-state detection.

use super::moves::slide;
use crate::types::{Direction, Grid, GRID_SIZE};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether the game can no longer change.
///
/// True iff the grid has no empty cell and none of the horizontal or
/// vertical neighbour pairs hold equal values.
#[instrument(skip(grid))]
pub fn is_terminal(grid: &Grid) -> bool {
    if !grid.is_full() {
        return false;
    }

    let rows = grid.rows();
    let horizontal_pair = (0..GRID_SIZE)
        .any(|row| (0..GRID_SIZE - 1).any(|col| rows[row][col] == rows[row][col + 1]));
    let vertical_pair = (0..GRID_SIZE - 1)
        .any(|row| (0..GRID_SIZE).any(|col| rows[row][col] == rows[row + 1][col]));

    !horizontal_pair && !vertical_pair
}

/// Directions that would change the grid, in `Direction` declaration order.
///
/// Empty exactly when [`is_terminal`] holds.
#[instrument(skip(grid))]
pub fn available_moves(grid: &Grid) -> Vec<Direction> {
    Direction::iter()
        .filter(|&direction| slide(grid, direction).moved)
        .collect()
}
