//! Clicker strategy simulator CLI.
//!
//! Run the reference purchase strategies against the standard shop and
//! compare their outcomes.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                          # All strategies, 1e10 second horizon
//!   cargo run -- -s cheap -d 1e6      # One strategy, shorter horizon
//!   cargo run -- --json               # Also write a JSON report file

use clicker::build_info;
use clicker::shop::Shop;
use clicker::simulator::{run_simulation, SimConfig};
use clicker::strategy::StrategyKind;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║               CLICKER STRATEGY SIMULATOR                      ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Horizon:     {:e} seconds", config.duration);
        println!(
            "  Strategies:  {}",
            config
                .strategies
                .iter()
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
        println!("Running simulation...");
        println!();
    }

    let shop = Shop::standard();
    let report = run_simulation(&shop, &config);

    println!("{}", report.to_text());

    if config.verbosity >= 2 {
        println!("{}", report.timeline_text());
    }

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => {
                eprintln!("Failed to write JSON report: {}", err);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-d" | "--duration" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<f64>() {
                        Ok(duration) => config.duration = duration,
                        Err(_) => usage_error(&format!("bad duration: {}", args[i + 1])),
                    }
                    i += 1;
                }
            }
            "-s" | "--strategy" => {
                if i + 1 < args.len() {
                    let name = args[i + 1].as_str();
                    if name == "all" {
                        config.strategies = StrategyKind::all().to_vec();
                    } else {
                        match StrategyKind::parse(name) {
                            Some(kind) => config.strategies = vec![kind],
                            None => usage_error(&format!("unknown strategy: {}", name)),
                        }
                    }
                    i += 1;
                }
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--json" => {
                // Handled in main after the run.
            }
            "--version" => {
                println!(
                    "clicker {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                usage_error(&format!("unknown option: {}", other));
            }
        }
        i += 1;
    }

    config
}

fn usage_error(message: &str) -> ! {
    eprintln!("error: {}", message);
    eprintln!("Run with --help for usage.");
    std::process::exit(2);
}

fn print_help() {
    println!("Clicker Strategy Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -d, --duration <SECS>   Simulation horizon in seconds (default: 1e10)");
    println!("    -s, --strategy <NAME>   none | cheap | expensive | best | all (default: all)");
    println!("    -v, --verbose           Per-purchase timelines and run detail");
    println!("    -q, --quiet             Report only, no banner");
    println!("    --quick                 Short-horizon smoke run (1e4 seconds)");
    println!("    --json                  Save a timestamped JSON report");
    println!("    --version               Show build info");
    println!("    -h, --help              Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run                              # Compare all strategies");
    println!("    cargo run -- -s best -d 1000000        # Best-ratio, 1e6 seconds");
    println!("    cargo run -- --quick -v                # Quick run with timelines");
}
