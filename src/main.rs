//! CLI entry point for the truck solver.
//!
//! Usage:
//!   truck-solver solve [puzzle.json] [options]
//!   truck-solver solve --stdin [options]
//!
//! Options:
//!   -w, --weights <n>...     Animal weights (default: the standard puzzle)
//!   -p, --powerups <n>...    Powerup multipliers (default: 2 through 10)
//!   --start-truck <n>        Starting truck value (default: 2)
//!   --pq <n>                 Priority queue bound, < 2 disables it (default: 511)
//!   --all / --no-all         Collect every solution instead of the first
//!   --json                   Print the result as JSON
//!   -v                       Increase log verbosity (repeatable)

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};

use truck_solver::{
    pretty_list, render_log, replay, solve, CliError, Operation, PuzzleConfig, SearchMode,
    SolverConfig, SolverResult, DEFAULT_QUEUE_BOUND,
};

#[derive(Parser)]
#[command(name = "truck-solver")]
#[command(about = "Branch-and-bound solver for the truck weights and powerups puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for operation logs that carry every weight
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// List of animal weights
        #[arg(short, long, num_args = 1..)]
        weights: Option<Vec<u64>>,

        /// List of powerups
        #[arg(short, long, num_args = 1..)]
        powerups: Option<Vec<u64>>,

        /// Starting truck value
        #[arg(long)]
        start_truck: Option<u64>,

        /// Max priority queue for powerup sets (< 2 means no priority queue used)
        #[arg(long, default_value_t = DEFAULT_QUEUE_BOUND as i64, allow_negative_numbers = true)]
        pq: i64,

        /// Generate all solutions instead of just the first found
        #[arg(long, overrides_with = "no_all")]
        all: bool,

        /// Stop at the first solution found
        #[arg(long, overrides_with = "all")]
        no_all: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Increment the verbosity level by 1
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
}

/// JSON output for a solver run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    found: bool,
    search_exhausted: bool,
    positions_explored: usize,
    time_elapsed_ms: u64,
    solutions: Vec<SolutionOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolutionOutput {
    operations: Vec<Operation>,
    rendered: String,
    verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_truck: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            weights,
            powerups,
            start_truck,
            pq,
            all,
            no_all: _,
            json,
            verbose,
        } => {
            init_logging(verbose);

            let puzzle = match load_puzzle(file, stdin, weights, powerups, start_truck) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            };
            info!("weights: {}", pretty_list(&puzzle.weights));
            info!("powerups: {}", pretty_list(&puzzle.powerups));

            let config = SolverConfig {
                queue_bound: pq.max(0) as usize,
                mode: if all {
                    SearchMode::AllSolutions
                } else {
                    SearchMode::FirstSolution
                },
            };

            let result = solve(&puzzle, &config);

            if json {
                match serde_json::to_string_pretty(&format_result(&puzzle, &result)) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(2);
                    }
                }
            } else {
                print_text(&result);
            }

            // Exit with appropriate code
            process::exit(if result.found() { 0 } else { 1 });
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Build the puzzle from an optional file or stdin, then apply flag overrides
fn load_puzzle(
    file: Option<PathBuf>,
    stdin: bool,
    weights: Option<Vec<u64>>,
    powerups: Option<Vec<u64>>,
    start_truck: Option<u64>,
) -> Result<PuzzleConfig, CliError> {
    let mut puzzle = match (stdin, file) {
        (true, Some(_)) => return Err(CliError::AmbiguousInput),
        (true, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            serde_json::from_str(&buffer)?
        }
        (false, Some(path)) => serde_json::from_str(&fs::read_to_string(path)?)?,
        (false, None) => PuzzleConfig::default(),
    };

    if let Some(w) = weights {
        puzzle.weights = w;
    }
    if let Some(p) = powerups {
        puzzle.powerups = p;
    }
    if let Some(t) = start_truck {
        puzzle.start_truck = t;
    }

    puzzle.sort();
    puzzle.validate()?;
    Ok(puzzle)
}

fn print_text(result: &SolverResult) {
    if result.found() {
        println!("solution(s) found:");
        for (ix, log) in result.solutions.iter().enumerate() {
            println!("{:3}: {}", ix, render_log(log));
        }
    } else {
        println!("No solutions found.");
    }
    println!("{} positions explored", result.nodes_explored);
}

fn format_result(puzzle: &PuzzleConfig, result: &SolverResult) -> SolveOutput {
    SolveOutput {
        found: result.found(),
        search_exhausted: result.search_exhausted,
        positions_explored: result.nodes_explored,
        time_elapsed_ms: result.time_elapsed_ms,
        solutions: result
            .solutions
            .iter()
            .map(|log| {
                let final_truck = replay(puzzle, log).ok();
                SolutionOutput {
                    operations: log.clone(),
                    rendered: render_log(log),
                    verified: final_truck.is_some(),
                    final_truck: final_truck.map(|t| t.to_string()),
                }
            })
            .collect(),
    }
}
