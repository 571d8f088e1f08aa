//! Combat balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze class and location balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 200 warrior runs in the forest
//!   cargo run --bin simulate -- -c mage -l cave    # Mage in the cave
//!   cargo run --bin simulate -- --seed 42          # Reproducible run

use skirmish::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              SKIRMISH BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Class:          {}", config.class_id);
    println!("  Location:       {}", config.location_id);
    println!("  Encounters:     {}", config.encounters_per_run);
    if config.clamp_mp {
        println!("  Mana:           clamped at zero");
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-e" | "--encounters" => {
                if i + 1 < args.len() {
                    config.encounters_per_run = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-c" | "--class" => {
                if i + 1 < args.len() {
                    config.class_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "-l" | "--location" => {
                if i + 1 < args.len() {
                    config.location_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--clamp-mp" => {
                config.clamp_mp = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Skirmish Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>         Number of simulation runs (default: 200)");
    println!("    -e, --encounters <N>   Encounters per run (default: 20)");
    println!("    -c, --class <ID>       Class to play (default: warrior)");
    println!("    -l, --location <ID>    Location to fight in (default: forest)");
    println!("    -s, --seed <S>         Random seed for reproducibility");
    println!("    --clamp-mp             Stop skills from driving mana negative");
    println!("    --json                 Also save a JSON report");
    println!("    -v, --verbose          Print every run");
    println!("    -h, --help             Show this help");
}
