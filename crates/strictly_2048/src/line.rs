//! Single-line slide and merge.
//!
//! Every directional move reduces to this operation on a line ordered so
//! that index 0 is the edge tiles travel towards.

use crate::types::{Score, Tile};

/// A compacted line and the points its merges produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome<const N: usize> {
    /// Tiles packed towards index 0, right-padded with zeros.
    pub line: [Tile; N],
    /// Sum of every merged tile.
    pub points: Score,
}

/// Slides a line towards index 0, merging equal neighbours once.
///
/// Empty cells are skipped, then the dense sequence is scanned left to
/// right: two adjacent equal tiles become their sum and the result is not
/// compared against the next tile in the same pass. A run of three equal
/// tiles therefore yields exactly one merge, the leftmost pair.
///
/// ```
/// use strictly_2048::compact_and_merge_line;
///
/// let out = compact_and_merge_line([2, 2, 2, 0]);
/// assert_eq!(out.line, [4, 2, 0, 0]);
/// assert_eq!(out.points, 4);
/// ```
pub fn compact_and_merge_line<const N: usize>(line: [Tile; N]) -> LineOutcome<N> {
    let mut packed = [0; N];
    let mut len = 0;
    let mut points = 0;
    let mut pending: Option<Tile> = None;

    for tile in line.into_iter().filter(|&tile| tile != 0) {
        debug_assert!(tile.is_power_of_two(), "tile {tile} is not a power of two");
        match pending.take() {
            Some(prev) if prev == tile => {
                let merged = prev + tile;
                packed[len] = merged;
                len += 1;
                points += Score::from(merged);
            }
            Some(prev) => {
                packed[len] = prev;
                len += 1;
                pending = Some(tile);
            }
            None => pending = Some(tile),
        }
    }

    if let Some(prev) = pending {
        packed[len] = prev;
    }

    LineOutcome {
        line: packed,
        points,
    }
}
