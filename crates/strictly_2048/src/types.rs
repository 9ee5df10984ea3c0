//! Core domain types for 2048.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Side length of the board.
pub const GRID_SIZE: usize = 4;

/// Tile value that wins the game the first time it appears.
pub const WIN_TILE: Tile = 2048;

/// A cell value: `0` is empty, anything else is a power of two ≥ 2.
pub type Tile = u32;

/// Points accumulated from merges.
pub type Score = u64;

/// One row or column of the board, ordered in the direction of travel.
pub type Line = [Tile; GRID_SIZE];

/// Direction a move slides the tiles.
///
/// This is the abstract input token: the presentation layer maps its own
/// key events onto it and the engine never sees anything else.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Slide towards row 0.
    #[display("up")]
    Up,
    /// Slide towards the last row.
    #[display("down")]
    Down,
    /// Slide towards column 0.
    #[display("left")]
    Left,
    /// Slide towards the last column.
    #[display("right")]
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// True if the move operates on rows rather than columns.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True if lines must be reversed so travel runs towards index 0.
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Arrow glyph for display.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Left => "←",
            Direction::Right => "→",
        }
    }
}

/// 4x4 board of tiles in row-major order.
///
/// `Grid` is `Copy`: moves return a fresh grid, so a caller's snapshot of the
/// previous state is never disturbed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Tile; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from explicit rows.
    ///
    /// Every value must be 0 or a power of two; this is checked in debug
    /// builds only.
    #[instrument]
    pub fn from_rows(cells: [[Tile; GRID_SIZE]; GRID_SIZE]) -> Self {
        let grid = Self { cells };
        crate::invariants::assert_grid_invariants(&grid);
        grid
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Tile; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Returns the tile at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row][col]
    }

    /// Writes a tile at `(row, col)`.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.cells[row][col] = value;
    }

    /// Returns row `index`, left to right.
    pub fn row(&self, index: usize) -> Line {
        self.cells[index]
    }

    /// Returns column `index`, top to bottom.
    pub fn column(&self, index: usize) -> Line {
        std::array::from_fn(|row| self.cells[row][index])
    }

    pub(crate) fn set_row(&mut self, index: usize, line: Line) {
        self.cells[index] = line;
    }

    pub(crate) fn set_column(&mut self, index: usize, line: Line) {
        for (row, value) in line.into_iter().enumerate() {
            self.cells[row][index] = value;
        }
    }

    /// Iterates over every tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col] == 0)
            .collect()
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.tiles().all(|tile| tile != 0)
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.tiles().filter(|&tile| tile != 0).count()
    }

    /// Largest tile on the board (0 for an empty grid).
    pub fn max_tile(&self) -> Tile {
        self.tiles().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.tiles().map(u64::from).sum()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, &tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if tile == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", tile)?;
                }
            }
        }
        Ok(())
    }
}

/// Result of sliding the whole grid in one direction.
///
/// `moved == false` implies `points == 0` and `grid` equals the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Grid after the slide (no tile spawned yet).
    pub grid: Grid,
    /// Whether any cell changed.
    pub moved: bool,
    /// Sum of every merge produced by this move.
    pub points: Score,
}

impl MoveOutcome {
    /// Outcome of a move that changed nothing.
    pub fn unchanged(grid: Grid) -> Self {
        Self {
            grid,
            moved: false,
            points: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_reads_top_to_bottom() {
        let grid = Grid::from_rows([
            [2, 0, 0, 0],
            [4, 0, 0, 0],
            [8, 0, 0, 0],
            [16, 0, 0, 0],
        ]);
        assert_eq!(grid.column(0), [2, 4, 8, 16]);
        assert_eq!(grid.column(1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_set_column_writes_back() {
        let mut grid = Grid::new();
        grid.set_column(2, [2, 0, 4, 0]);
        assert_eq!(grid.get(0, 2), 2);
        assert_eq!(grid.get(2, 2), 4);
        assert_eq!(grid.tile_count(), 2);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows([
            [2, 2, 2, 2],
            [2, 0, 2, 2],
            [2, 2, 2, 2],
            [2, 2, 2, 0],
        ]);
        assert_eq!(grid.empty_cells(), vec![(1, 1), (3, 3)]);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_max_and_sum() {
        let grid = Grid::from_rows([
            [2, 4, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 1024, 0],
            [0, 0, 0, 8],
        ]);
        assert_eq!(grid.max_tile(), 1024);
        assert_eq!(grid.tile_sum(), 1038);
        assert_eq!(Grid::new().max_tile(), 0);
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let grid = Grid::from_rows([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 2048],
        ]);
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "    2     .     .     .");
        assert_eq!(lines[3], "    .     .     .  2048");
    }

    #[test]
    fn test_direction_axes() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_reversed());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Up.is_reversed());
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
