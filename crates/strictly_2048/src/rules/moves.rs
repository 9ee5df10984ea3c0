//! Directional moves.

use crate::line::{LineOutcome, compact_and_merge_line};
use crate::types::{Direction, Grid, MoveOutcome, GRID_SIZE};
use tracing::{instrument, trace};

/// Slides every row or column of `grid` in `direction`.
///
/// Rows are used for left/right, columns for up/down. Lines travelling
/// towards the far edge are reversed before compaction and reversed back
/// after. `moved` compares all cells of input and output.
#[instrument(skip(grid), fields(max_tile = grid.max_tile()))]
pub fn slide(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut next = *grid;
    let mut points = 0;

    for index in 0..GRID_SIZE {
        let mut line = if direction.is_horizontal() {
            grid.row(index)
        } else {
            grid.column(index)
        };
        if direction.is_reversed() {
            line.reverse();
        }

        let LineOutcome {
            line: mut packed,
            points: line_points,
        } = compact_and_merge_line(line);

        if direction.is_reversed() {
            packed.reverse();
        }
        if direction.is_horizontal() {
            next.set_row(index, packed);
        } else {
            next.set_column(index, packed);
        }
        points += line_points;
    }

    let moved = next != *grid;
    debug_assert!(moved || points == 0, "merge reported without movement");
    trace!(moved, points, "Slide computed");

    MoveOutcome {
        grid: next,
        moved,
        points,
    }
}

/// Slides tiles towards column 0.
pub fn move_left(grid: &Grid) -> MoveOutcome {
    slide(grid, Direction::Left)
}

/// Slides tiles towards the last column.
pub fn move_right(grid: &Grid) -> MoveOutcome {
    slide(grid, Direction::Right)
}

/// Slides tiles towards row 0.
pub fn move_up(grid: &Grid) -> MoveOutcome {
    slide(grid, Direction::Up)
}

/// Slides tiles towards the last row.
pub fn move_down(grid: &Grid) -> MoveOutcome {
    slide(grid, Direction::Down)
}
