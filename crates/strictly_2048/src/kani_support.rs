//! Kani harnesses for the line merge.
//!
//! Lines are built from exponents so the model checker only explores
//! well-formed tiles.

#[cfg(kani)]
use crate::line::compact_and_merge_line;
#[cfg(kani)]
use crate::types::{Line, Tile, GRID_SIZE};

#[cfg(kani)]
fn any_line() -> Line {
    let mut line = [0; GRID_SIZE];
    for cell in line.iter_mut() {
        let exponent: u8 = kani::any();
        kani::assume(exponent <= 11);
        *cell = if exponent == 0 { 0 } else { (1 as Tile) << exponent };
    }
    line
}

#[cfg(kani)]
#[kani::proof]
fn merge_conserves_tile_sum() {
    let line = any_line();
    let out = compact_and_merge_line(line);
    let before: u64 = line.iter().map(|&t| u64::from(t)).sum();
    let after: u64 = out.line.iter().map(|&t| u64::from(t)).sum();
    assert_eq!(before, after);
}

#[cfg(kani)]
#[kani::proof]
fn merge_packs_towards_front() {
    let out = compact_and_merge_line(any_line());
    let mut seen_empty = false;
    for tile in out.line {
        if tile == 0 {
            seen_empty = true;
        } else {
            assert!(!seen_empty);
        }
    }
}

#[cfg(kani)]
#[kani::proof]
fn merge_is_stable_once_packed() {
    let first = compact_and_merge_line(any_line());
    let second = compact_and_merge_line(first.line);
    if second.points == 0 {
        assert_eq!(first.line, second.line);
    }
}
