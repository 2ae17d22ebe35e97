use clap::{Parser, ValueEnum};
use eight_puzzle_solver::engine::{is_solvable, Board};
use eight_puzzle_solver::heuristics::{hamming, manhattan};
use eight_puzzle_solver::solver::search;
use eight_puzzle_solver::utils::board_from_str;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

/// Heuristic guiding the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Heuristic {
    /// Count of misplaced tiles
    Hamming,
    /// Summed tile displacement
    Manhattan,
}

impl Heuristic {
    fn estimate(self, board: &Board) -> u32 {
        match self {
            Heuristic::Hamming => hamming(board),
            Heuristic::Manhattan => manhattan(board),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Heuristic::Hamming => "hamming",
            Heuristic::Manhattan => "manhattan",
        };
        write!(f, "{}", s)
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic guiding the search
    #[clap(long, value_enum, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,

    /// Path to the board file (nine values 0-8, 0 marks the blank)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    board_from_str(&content).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    let args = Args::parse();

    let board = read_board_file(&args.board_file).expect(&format!(
        "Failed to read board from file: {}",
        args.board_file.display()
    ));
    println!("Loaded board from {}\n", args.board_file.display());
    println!("Start configuration:\n{}\n", board);

    if !is_solvable(board.tiles()) {
        eprintln!("This configuration cannot reach the goal (odd inversion count).");
        process::exit(1);
    }

    println!("Searching with the {} heuristic...\n", args.heuristic);

    let heuristic = args.heuristic;
    let started = Instant::now();
    let solution = search(board, move |b| b.moves() + heuristic.estimate(b))
        .expect("a solvable board always yields a solution");
    let elapsed = started.elapsed();

    println!("Solved in {} moves.", solution.board.moves());
    println!("Nodes expanded: {}", solution.nodes_expanded);
    println!("Elapsed time: {:.6}s", elapsed.as_secs_f64());
}
