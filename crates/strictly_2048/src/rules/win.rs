//! Win detection logic for 2048.

use crate::types::{Grid, Tile, WIN_TILE};
use tracing::instrument;

/// Checks if any cell holds exactly `target`.
#[instrument(skip(grid))]
pub fn contains_value(grid: &Grid, target: Tile) -> bool {
    grid.tiles().any(|tile| tile == target)
}

/// Checks if the winning tile is on the board.
///
/// Only the exact value counts; play is unbounded above it.
pub fn has_won(grid: &Grid) -> bool {
    contains_value(grid, WIN_TILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_value_scans_every_cell() {
        let grid = Grid::from_rows([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 64],
        ]);
        assert!(contains_value(&grid, 64));
        assert!(!contains_value(&grid, 32));
    }

    #[test]
    fn test_has_won_requires_exact_tile() {
        let grid = Grid::from_rows([
            [1024, 1024, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        assert!(!has_won(&grid));

        let grid = Grid::from_rows([
            [2048, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        assert!(has_won(&grid));
    }

    #[test]
    fn test_larger_tile_alone_does_not_win() {
        let grid = Grid::from_rows([
            [4096, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        assert!(!has_won(&grid));
    }
}
