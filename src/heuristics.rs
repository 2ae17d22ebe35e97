//! Heuristic evaluators for the 8-puzzle search.
//!
//! Both evaluators are pure functions from a board to a lower bound on the
//! number of moves still needed to reach the goal. Neither ever
//! overestimates (they are admissible), and both satisfy the triangle
//! inequality across adjacent boards (they are consistent), which is what
//! lets the search in [`crate::solver`] skip re-opening closed
//! configurations and still pop the goal at its optimal depth.
//!
//! Callers compose a cost function as `board.moves() + heuristic(board)` and
//! inject it into [`crate::solver::search`], so swapping heuristics never
//! touches the engine.
use crate::engine::{Board, SIDE};

/// Counts the tiles standing on the wrong cell (the Hamming distance).
///
/// The blank is never counted: its position is implied by the other eight
/// tiles, and counting it would overestimate on boards one move from the
/// goal. Every misplaced tile needs at least one move, so the count is a
/// valid lower bound. Range `0..=8`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::hamming;
///
/// assert_eq!(hamming(&Board::goal()), 0);
///
/// let one_off = Board::from_tiles([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// assert_eq!(hamming(&one_off), 1);
/// ```
pub fn hamming(board: &Board) -> u32 {
    let mut misplaced = 0;
    for (cell, &tile) in board.tiles().iter().enumerate() {
        if tile != 0 && usize::from(tile) != cell {
            misplaced += 1;
        }
    }
    misplaced
}

/// Sums each tile's grid distance from its goal cell (the Manhattan
/// distance).
///
/// For every non-blank tile the row and column deltas between its current
/// cell and its goal cell (`row = cell / 3`, `col = cell % 3`) are added up.
/// Each move slides exactly one tile one cell, so the sum is a valid lower
/// bound, and it dominates the Hamming count: a misplaced tile contributes
/// at least 1 here and exactly 1 there.
pub fn manhattan(board: &Board) -> u32 {
    let mut distance = 0;
    for (cell, &tile) in board.tiles().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let goal = usize::from(tile);
        let row_delta = (cell / SIDE) as i32 - (goal / SIDE) as i32;
        let col_delta = (cell % SIDE) as i32 - (goal % SIDE) as i32;
        distance += row_delta.unsigned_abs() + col_delta.unsigned_abs();
    }
    distance
}
