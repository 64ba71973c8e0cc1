//! Misplaced-tile heuristic

use crate::state::{State, BLANK};

/// Number of tiles of `state` that are not where `goal` has them.
///
/// Unlike a plain count of differing cells, the blank is not a tile and is
/// never counted, so a single move changes the result by at most one and
/// the count never exceeds the number of moves left to reach `goal`.
pub fn misplaced_tiles(state: &State, goal: &State) -> u32 {
    state
        .cells()
        .iter()
        .zip(goal.cells().iter())
        .filter(|&(&value, &target)| value != BLANK && value != target)
        .count() as u32
}
