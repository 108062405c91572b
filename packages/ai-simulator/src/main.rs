//! AI Simulator CLI - Fast in-memory match simulation for AI evaluation.
//!
//! Runs matches entirely in memory against the pure engine, allowing
//! rapid comparison of AI difficulty tiers over many seeds.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use decree_engine::ai::AiPlayer;
use metrics::build_match_metrics;
use output::OutputWriter;
use simulator::{MatchResult, Simulator};
use tracing::{info, warn};
use types::{OutputFormat, Tier};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory match simulator for AI evaluation")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// AI tier for both seats (shortcut to set both seats the same)
    #[arg(long, conflicts_with_all = ["seat0", "seat1"])]
    seats: Option<Tier>,

    /// AI tier for seat 0
    #[arg(long, default_value = "hard")]
    seat0: Tier,

    /// AI tier for seat 1
    #[arg(long, default_value = "hard")]
    seat1: Tier,

    /// Match seed (for deterministic matches); successive matches use
    /// seed, seed+1, ...
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, warnings and errors only.
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_tiers = match args.seats {
        Some(tier) => [tier, tier],
        None => [args.seat0, args.seat1],
    };

    if args.show_output {
        info!("Starting AI simulator");
        info!(
            "Configuration: {} matches, seat0={}, seat1={}",
            args.matches,
            seat_tiers[0].name(),
            seat_tiers[1].name()
        );
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let ai_names = [
        seat_tiers[0].name().to_string(),
        seat_tiers[1].name().to_string(),
    ];

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for match_num in 1..=args.matches {
        let match_start = Instant::now();
        let match_seed = match args.seed {
            Some(s) => s.wrapping_add((match_num - 1) as u64),
            None => rand::random(),
        };

        // Fresh AI instances per match so seeded RNG state never leaks
        // across matches.
        let ais: [Box<dyn AiPlayer + Send + Sync>; 2] = [
            seat_tiers[0].difficulty().create(Some(match_seed)),
            seat_tiers[1].difficulty().create(Some(match_seed ^ 0x5EED)),
        ];

        match Simulator::new(match_seed).simulate_match(&ais) {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(
                    match_num,
                    match_seed,
                    ai_names.clone(),
                    args.matches,
                    &result,
                    duration_ms,
                );

                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!("Failed to write metrics for match {}: {}", match_num, e);
                }

                if args.verbose {
                    info!(
                        "Match {} completed: scores={:?}, rounds={}",
                        match_num, result.final_scores, result.rounds_played
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", match_num, e);
            }
        }
    }

    let elapsed = start.elapsed();

    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.cloned();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        if let Some(path) = csv_path {
            info!("Summary CSV written to: {}", path.display());
        }
        print_summary(&results, errors, elapsed, args.matches);
    }

    Ok(())
}

fn print_summary(results: &[MatchResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if !results.is_empty() {
        println!(
            "Average time per match: {:?}",
            elapsed / results.len() as u32
        );
    }

    if results.is_empty() {
        return;
    }

    let mut wins = [0u32; 2];
    let mut total_scores = [0u64; 2];
    let mut total_rounds = 0u64;

    for result in results {
        wins[result.winner as usize] += 1;
        for seat in 0..2 {
            total_scores[seat] += result.final_scores[seat] as u64;
        }
        total_rounds += result.rounds_played as u64;
    }

    println!(
        "Average rounds per match: {:.1}",
        total_rounds as f64 / results.len() as f64
    );
    println!("\n=== Results by Seat ===");
    for seat in 0..2 {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:.1}, wins={} ({:.1}%)",
            seat, avg_score, wins[seat], win_rate
        );
    }
}
