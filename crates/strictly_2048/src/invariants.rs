//! First-class invariants for 2048.
//!
//! Invariants are logical properties of a grid or of a single move. They
//! are testable on their own and are asserted in debug builds wherever the
//! engine or its caller produces a new grid.

use crate::types::{Grid, MoveOutcome};
use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant or contract.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated property.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Every cell is empty or holds a power of two no smaller than 2.
pub struct PowerOfTwoTiles;

impl Invariant<Grid> for PowerOfTwoTiles {
    fn holds(grid: &Grid) -> bool {
        grid.tiles()
            .all(|tile| tile == 0 || (tile >= 2 && tile.is_power_of_two()))
    }

    fn description() -> &'static str {
        "Every tile is 0 or a power of two >= 2"
    }
}

/// Asserts grid invariants (panics on violation in debug builds).
#[instrument(skip(grid))]
pub fn assert_grid_invariants(grid: &Grid) {
    debug_assert!(
        PowerOfTwoTiles::holds(grid),
        "{}: {:?}",
        PowerOfTwoTiles::description(),
        grid
    );
}

/// Postconditions of a single slide.
///
/// - Tiles stay powers of two
/// - Merging moves value around but never creates or destroys it, so the
///   tile sum is unchanged by the slide itself
/// - `moved` is exactly "some cell differs"
/// - A move that changed nothing scored nothing
pub struct MoveContract;

impl MoveContract {
    /// Checks the postconditions of `outcome`, produced by sliding `before`.
    #[instrument(skip_all)]
    pub fn post(before: &Grid, outcome: &MoveOutcome) -> Result<(), InvariantViolation> {
        if !PowerOfTwoTiles::holds(&outcome.grid) {
            return Err(InvariantViolation::new(PowerOfTwoTiles::description()));
        }

        let (sum_before, sum_after) = (before.tile_sum(), outcome.grid.tile_sum());
        if sum_before != sum_after {
            warn!(sum_before, sum_after, "Tile sum changed during slide");
            return Err(InvariantViolation::new(format!(
                "Tile sum changed from {} to {}",
                sum_before, sum_after
            )));
        }

        if outcome.moved != (*before != outcome.grid) {
            return Err(InvariantViolation::new(
                "Moved flag disagrees with cell comparison",
            ));
        }

        if !outcome.moved && outcome.points != 0 {
            return Err(InvariantViolation::new(format!(
                "Unchanged move scored {} points",
                outcome.points
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::slide;
    use crate::types::Direction;

    #[test]
    fn test_power_of_two_accepts_valid_grid() {
        let grid = Grid::from_rows([
            [0, 2, 4, 8],
            [16, 32, 64, 128],
            [256, 512, 1024, 2048],
            [4096, 8192, 0, 0],
        ]);
        assert!(PowerOfTwoTiles::holds(&grid));
    }

    #[test]
    fn test_post_holds_for_every_direction() {
        let grid = Grid::from_rows([
            [2, 2, 4, 0],
            [0, 4, 4, 8],
            [16, 0, 16, 2],
            [2, 2, 2, 2],
        ]);
        for direction in Direction::ALL {
            let outcome = slide(&grid, direction);
            assert!(MoveContract::post(&grid, &outcome).is_ok(), "{direction}");
        }
    }

    #[test]
    fn test_post_detects_created_value() {
        let grid = Grid::from_rows([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut outcome = slide(&grid, Direction::Left);
        outcome.grid.set(3, 3, 2);
        assert!(MoveContract::post(&grid, &outcome).is_err());
    }

    #[test]
    fn test_post_detects_lying_moved_flag() {
        let grid = Grid::from_rows([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut outcome = slide(&grid, Direction::Left);
        outcome.moved = true;
        let err = MoveContract::post(&grid, &outcome).unwrap_err();
        assert!(err.to_string().contains("Moved flag"));
    }
}
