//! `mis-lab` command-line tool.
//!
//! ```bash
//! # Generate the default graph suite into ./graphs
//! mis-lab generate
//!
//! # Run both searches over it with a one-minute budget per graph
//! mis-lab run --budget-secs 60
//!
//! # Compare greedy against exhaustive set sizes
//! mis-lab compare --out results/comparison.json
//! ```

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use mis_lab::compare::compare_files;
use mis_lab::construction::{generate_suite, GeneratorConfig, DEFAULT_SEED};
use mis_lab::experiment::{run_all, ExperimentConfig, ALL_RESULTS_FILE};
use mis_lab::persist::load_adjacency_json;
use mis_lab::search::Algorithm;
use mis_lab::validate::validate_fixtures;
use mis_lab::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Exhaustive vs. greedy maximum independent set experiments
#[derive(Parser)]
#[command(name = "mis-lab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a seeded G(n, p) graph suite
    Generate {
        /// Output directory
        #[arg(short, long, default_value = "graphs")]
        out: PathBuf,

        /// Smallest vertex count
        #[arg(long, default_value_t = 4)]
        min_vertices: usize,

        /// Largest vertex count
        #[arg(long, default_value_t = 500)]
        max_vertices: usize,

        /// Edge probabilities (comma-separated)
        #[arg(long, value_delimiter = ',', default_value = "0.125,0.25,0.5,0.75")]
        densities: Vec<f64>,

        /// Generator seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Run the searches over a graph suite and write result tables
    Run {
        /// Directory of graph_<id>.json files
        #[arg(short, long, default_value = "graphs")]
        graphs: PathBuf,

        /// Directory receiving the result tables
        #[arg(short, long, default_value = "results")]
        results: PathBuf,

        /// Per-graph wall-clock budget in seconds
        #[arg(short, long, default_value_t = 120.0)]
        budget_secs: f64,

        /// Algorithm to run (repeatable; default: both)
        #[arg(short, long)]
        algorithm: Vec<Algorithm>,
    },

    /// Search a single graph file and print the outcome as JSON
    Solve {
        /// Adjacency-list JSON file
        file: PathBuf,

        /// Algorithm to run
        #[arg(short, long, default_value = "greedy")]
        algorithm: Algorithm,
    },

    /// Compare greedy against exhaustive result tables
    Compare {
        /// Exhaustive result table
        #[arg(long, default_value = "results/exhaustive_results.json")]
        exhaustive: PathBuf,

        /// Greedy result table
        #[arg(long, default_value = "results/greedy_results.json")]
        greedy: PathBuf,

        /// Write the report here as well as to stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check both searches on graphs with known independence numbers
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            out,
            min_vertices,
            max_vertices,
            densities,
            seed,
        } => {
            let config = GeneratorConfig {
                min_vertices,
                max_vertices,
                densities,
                seed,
                output_dir: out,
            };
            let written = generate_suite(&config)?;
            info!("{} graphs written to {}", written.len(), config.output_dir.display());
        }

        Commands::Run {
            graphs,
            results,
            budget_secs,
            algorithm,
        } => {
            let mut config = ExperimentConfig {
                graphs_dir: graphs,
                results_dir: results,
                budget: budget_from_secs(budget_secs),
                ..ExperimentConfig::default()
            };
            if !algorithm.is_empty() {
                config.algorithms = algorithm;
            }
            let summaries = run_all(&config)?;
            for summary in &summaries {
                let largest = summary
                    .largest_completed()
                    .map_or_else(|| "none".to_owned(), |id| id.to_string());
                info!(
                    "{}: {} graphs, largest {largest}",
                    summary.algorithm.label(),
                    summary.results.len()
                );
            }
            info!("combined table: {}", config.results_dir.join(ALL_RESULTS_FILE).display());
        }

        Commands::Solve { file, algorithm } => {
            let graph = load_adjacency_json(&file)?;
            let outcome = algorithm.timed(&graph)?;
            print_json(&outcome);
        }

        Commands::Compare {
            exhaustive,
            greedy,
            out,
        } => {
            let report = compare_files(&exhaustive, &greedy, out.as_deref())?;
            print_json(&report);
            if let Some(rate) = report.match_rate() {
                info!("greedy matched the optimum on {:.1}% of graphs", rate * 100.0);
            }
        }

        Commands::Validate => {
            validate_fixtures()?;
            println!("Validation OK: both searches agree with the known independence numbers.");
        }
    }
    Ok(())
}

/// Negative or NaN budgets mean no time at all; huge ones mean no limit.
fn budget_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(if secs > 0.0 {
        Duration::MAX
    } else {
        Duration::ZERO
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => error!("failed to render JSON: {e}"),
    }
}
