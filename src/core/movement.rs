//! Movement module - slide and merge tiles along one of four directions
//!
//! One parametrized lane traversal covers all four directions: a direction maps
//! each (lane, scan position) pair to a grid coordinate, so left/right/up/down
//! share a single code path instead of duplicated per-direction loops.

use crate::core::board::Board;
use crate::types::Direction;

/// Merge a line of non-empty tile values with a single left-to-right pass.
///
/// Equal neighbors are summed and consumed as a pair, so a merged value is
/// never merged again within the same pass: `[2,2,2,2]` becomes `[4,4]`,
/// not `[8]`. Input must already be free of zeros and in scan order.
pub fn compact(values: &[u32]) -> Vec<u32> {
    let mut merged = Vec::with_capacity(values.len());
    let mut i = 0;
    while i + 1 < values.len() {
        let a = values[i];
        let b = values[i + 1];
        if a == b {
            merged.push(a + b);
            i += 2;
        } else {
            merged.push(a);
            i += 1;
        }
    }
    // Trailing element with no partner left to compare
    if i < values.len() {
        merged.push(values[i]);
    }
    merged
}

/// Grid coordinate of scan position `k` in lane `lane`.
///
/// Lanes are rows for horizontal moves and columns for vertical ones; the scan
/// starts at the edge tiles slide towards.
#[inline]
fn lane_cell(size: usize, direction: Direction, lane: usize, k: usize) -> (usize, usize) {
    match direction {
        Direction::Left => (k, lane),
        Direction::Right => (size - 1 - k, lane),
        Direction::Up => (lane, k),
        Direction::Down => (lane, size - 1 - k),
    }
}

/// Slide and merge every lane of the board towards `direction`.
///
/// Each lane is read in scan order, its non-empty values compacted, and the
/// result written back from the leading edge with the remainder zero-filled.
/// Returns true when any cell changed. No tiles are spawned here.
pub fn shift(board: &mut Board, direction: Direction) -> bool {
    let size = board.size();
    let mut changed = false;

    for lane in 0..size {
        let mut line = Vec::with_capacity(size);
        for k in 0..size {
            let (x, y) = lane_cell(size, direction, lane, k);
            // In-bounds by construction of lane_cell
            line.push(board.get(x, y).unwrap_or(0));
        }

        let tiles: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
        let mut merged = compact(&tiles);
        merged.resize(size, 0);

        if merged != line {
            changed = true;
            for (k, &value) in merged.iter().enumerate() {
                let (x, y) = lane_cell(size, direction, lane, k);
                board.set(x, y, value);
            }
        }
    }

    changed
}
