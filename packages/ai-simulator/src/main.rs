//! AI simulator CLI - fast in-memory bot-vs-bot simulation and reporting.
//!
//! `run` plays games entirely in memory without prompting or game-log
//! overhead; `analyze` computes aggregate statistics from a JSONL results
//! file produced by `run`.

mod analysis;
mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use kingless::engine::GameResult;
use kingless::telemetry::init_tracing;

use analysis::{analyze_jsonl, AnalysisResults};
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{create_policies, derive_game_seed, run_game};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory bot-vs-bot simulator for kingless")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate games between two bot policies
    Run {
        /// Number of games to simulate
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Policy for seat 0
        #[arg(long, default_value = "expert")]
        seat0: PolicyKind,

        /// Policy for seat 1
        #[arg(long, default_value = "expert")]
        seat1: PolicyKind,

        /// Base seed for deterministic runs; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory for results
        #[arg(long, default_value = "./simulation-results")]
        output_dir: String,

        /// Output format
        #[arg(long, default_value = "jsonl")]
        output_format: OutputFormat,

        /// Compress the JSONL output
        #[arg(long)]
        compress: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
    /// Report statistics from a JSONL results file
    Analyze {
        /// Path to a simulation_*.jsonl file
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyKind {
    Easy,
    Expert,
}

impl PolicyKind {
    fn name(self) -> &'static str {
        match self {
            PolicyKind::Easy => "easy",
            PolicyKind::Expert => "expert",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Command::Run {
            games,
            seat0,
            seat1,
            seed,
            output_dir,
            output_format,
            compress,
            verbose,
        } => {
            init_tracing(verbose);
            run_simulation(
                games,
                [seat0.name(), seat1.name()],
                seed,
                &output_dir,
                &output_format,
                compress,
            )
        }
        Command::Analyze { file } => {
            init_tracing(false);
            let results = analyze_jsonl(&file)?;
            print_report(&results);
            Ok(())
        }
    }
}

fn run_simulation(
    games: u32,
    policy_names: [&str; 2],
    seed: Option<u64>,
    output_dir: &str,
    output_format: &OutputFormat,
    compress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let base_seed = seed.unwrap_or_else(rand::random::<u64>);
    info!(
        games,
        seat0 = policy_names[0],
        seat1 = policy_names[1],
        base_seed,
        "starting simulation"
    );

    let policies = create_policies(policy_names, base_seed)?;
    let mut output_writer = OutputWriter::new(output_dir, output_format, compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_no in 1..=games {
        let game_start = Instant::now();
        let game_seed = derive_game_seed(base_seed, game_no);

        match run_game(game_no, game_seed, &policies) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_no,
                    game_seed,
                    [policy_names[0].to_string(), policy_names[1].to_string()],
                    games,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("failed to write metrics for game {}: {}", game_no, e);
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("game {} failed: {}", game_no, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.cloned();
    output_writer.finish()?;

    print_summary(&results, errors, elapsed, games);
    if let Some(path) = jsonl_path {
        println!("Detailed results written to: {}", path.display());
    }
    if let Some(path) = csv_path {
        println!("Summary CSV written to: {}", path.display());
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let mut wins = [0u32; 2];
    let mut ties = 0u32;
    let mut total_scores = [0u64; 2];
    for result in results {
        match result.outcome.winner() {
            Some(seat) => wins[seat as usize] += 1,
            None => ties += 1,
        }
        for seat in 0..2 {
            total_scores[seat] += u64::from(result.final_scores[seat]);
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..2 {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:.1}, wins={} ({:.1}%)",
            seat, avg_score, wins[seat], win_rate
        );
    }
    if ties > 0 {
        println!("Ties: {}", ties);
    }
}

fn print_report(results: &AnalysisResults) {
    println!("=== Analysis ===");
    println!("Games: {}", results.game_count());

    println!("\n=== Win rates by policy ===");
    let mut win_stats: Vec<_> = results.win_stats_by_policy().into_iter().collect();
    win_stats.sort_by(|a, b| a.0.cmp(&b.0));
    for (policy, stats) in &win_stats {
        println!(
            "{}: wins={} ties={} of {} ({:.1}%)",
            policy, stats.wins, stats.ties, stats.total_games, stats.win_rate
        );
    }

    println!("\n=== Average scores by policy ===");
    let mut score_stats: Vec<_> = results.avg_scores_by_policy().into_iter().collect();
    score_stats.sort_by(|a, b| a.0.cmp(&b.0));
    for (policy, stats) in &score_stats {
        println!("{}: avg={:.2} over {} games", policy, stats.avg_score, stats.game_count);
    }

    println!("\n=== Outcomes ===");
    let mut outcomes: Vec<_> = results.outcome_counts().into_iter().collect();
    outcomes.sort_by(|a, b| a.0.cmp(&b.0));
    for (kind, count) in &outcomes {
        println!("{}: {}", kind, count);
    }

    println!("\n=== Leader win probability by round ===");
    for (round_no, rate) in results.leader_win_rate_by_round() {
        println!("round {}: {:.3}", round_no, rate);
    }
}
