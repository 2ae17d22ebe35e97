//! # Eight Puzzle Solver Library
//!
//! This library solves the sliding 8-puzzle (3x3 tile puzzle with one blank)
//! using best-first graph search and compares the efficiency of two
//! admissible heuristics: misplaced-tile count (Hamming) and summed tile
//! displacement (Manhattan).
//!
//! It is used by two binaries:
//! - `puzzle_solver`: Solves a single board read from a file with a chosen
//!   heuristic and reports the optimal move count.
//! - `heuristic_evaluator`: Generates a batch of random solvable boards,
//!   solves each with both heuristics, and reports timing and expanded-node
//!   statistics per heuristic.
//!
//! ## Modules
//! - `engine`: Board representation (`Board`), successor expansion, the goal
//!   test, the inversion-parity solvability check, and seeded random board
//!   generation.
//! - `solver`: The cost-ordered frontier and the `search` entry point.
//! - `heuristics`: The two heuristic evaluators, `hamming` and `manhattan`.
//! - `stats`: Mean and standard deviation over benchmark measurements.
//! - `utils`: Parsing boards from their text representation.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod stats;
pub mod utils;

// Items from sub-modules, if public, are accessed via their full path,
// e.g. `eight_puzzle_solver::heuristics::manhattan()`. This keeps the
// top-level library namespace cleaner.
