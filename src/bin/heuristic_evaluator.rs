use clap::Parser;
use eight_puzzle_solver::engine::{random_solvable_boards, Board};
use eight_puzzle_solver::heuristics::{hamming, manhattan};
use eight_puzzle_solver::solver::search;
use eight_puzzle_solver::stats::{mean, std_dev};
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of random solvable puzzles solved per heuristic
    #[clap(short, long, default_value_t = 10)]
    puzzles: usize,

    /// Seed for the puzzle generator (same seed, same batch)
    #[clap(short, long, default_value_t = 0)]
    seed: u64,
}

type HeuristicFn = fn(&Board) -> u32;

fn main() {
    let args = Args::parse();

    let heuristics: Vec<(&str, HeuristicFn)> =
        vec![("Hamming", hamming), ("Manhattan", manhattan)];

    println!(
        "Generating {} random solvable puzzles (seed {})...\n",
        args.puzzles, args.seed
    );
    let boards = random_solvable_boards(args.puzzles, args.seed);

    // Both heuristics solve the identical batch, so the reported spreads
    // differ only by how hard each heuristic prunes.
    for (name, heuristic) in &heuristics {
        let mut times = Vec::with_capacity(boards.len());
        let mut expanded = Vec::with_capacity(boards.len());

        println!("{} heuristic:", name);
        for (index, board) in boards.iter().enumerate() {
            let started = Instant::now();
            let solution = search(board.clone(), |b| b.moves() + heuristic(b))
                .expect("generated boards are always solvable");
            let elapsed = started.elapsed().as_secs_f64();

            println!(
                "  Puzzle {:<3} solved in {:>2} moves, {:>6} nodes expanded",
                index,
                solution.board.moves(),
                solution.nodes_expanded
            );
            times.push(elapsed);
            expanded.push(solution.nodes_expanded as f64);
        }

        report(&times, &expanded);
    }
}

fn report(times: &[f64], expanded: &[f64]) {
    println!("  Mean time per puzzle:      {}", format_stat(mean(times), "s"));
    println!("  Std dev of time:           {}", format_stat(std_dev(times), "s"));
    println!(
        "  Mean expanded nodes:       {}",
        format_stat(mean(expanded), " nodes")
    );
    println!(
        "  Std dev of expanded nodes: {}",
        format_stat(std_dev(expanded), " nodes")
    );
    println!("{}", "-".repeat(57));
}

fn format_stat(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.6}{}", v, unit),
        None => "n/a".to_string(),
    }
}
