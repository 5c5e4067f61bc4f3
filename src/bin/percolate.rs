//! Estimate the percolation probability curve of an n x n lattice.
//!
//! Run with: cargo run --release --bin percolate
//!
//! Usage:
//!   percolate                      20x20 lattice, 1000 trials
//!   percolate -s 64 -t 1m          64x64 lattice, one million trials
//!   percolate --show               Print one sample lattice first
//!   percolate --csv curve.csv      Also write the binned curve as CSV
//!
//! Set RUST_LOG=debug (or trace) for run summaries from the library.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use percolation::{
    render, simulation, ConfigError, PercolationCurve, PercolationGrid, SimulationConfig,
};

const SHOW_PROBABILITY: f64 = 0.6;

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if s.ends_with('m') {
        (&s[..s.len() - 1], 1_000_000)
    } else if s.ends_with('k') {
        (&s[..s.len() - 1], 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

#[derive(Parser)]
#[command(name = "percolate")]
#[command(about = "Monte Carlo estimate of site percolation probability")]
struct Args {
    /// Lattice side length
    #[arg(short, long, default_value_t = 20)]
    side: usize,

    /// Number of trials (e.g., 1000, 50k, 1m)
    #[arg(short, long, default_value = "1000", value_parser = parse_count)]
    trials: usize,

    /// Random seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of p bins in the output curve
    #[arg(short, long, default_value_t = 20)]
    bins: usize,

    /// Render one sample lattice (p = 0.6) before the sweep
    #[arg(long)]
    show: bool,

    /// Write the binned curve to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn format_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}k", n / 1_000)
    } else {
        format!("{}", n)
    }
}

fn show_sample(side: usize, seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = simulation::trial_rng(seed, u64::MAX);
    let grid = PercolationGrid::new(side, SHOW_PROBABILITY, &mut rng)?;
    println!("Sample lattice (p = {}):", SHOW_PROBABILITY);
    println!("{}", render::render(&grid.sites()));
    println!(
        "  open sites = {} / {}, percolates = {}\n",
        grid.open_count(),
        side * side,
        grid.percolates()
    );
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig {
        side: args.side,
        trials: args.trials,
        seed: args.seed,
    };
    config.validate()?;
    if args.bins == 0 {
        return Err(ConfigError::InvalidBinCount.into());
    }

    println!("Percolation sweep");
    println!("=================\n");
    println!("Configuration:");
    println!("  lattice = {}x{}", config.side, config.side);
    println!("  trials = {}", format_num(config.trials));
    println!("  seed = {}", config.seed);
    println!("  p ~ Beta({0}, {0})", simulation::BETA_SHAPE);
    #[cfg(feature = "parallel")]
    println!("  threads = {}", rayon::current_num_threads());
    println!();

    if args.show {
        show_sample(config.side, config.seed)?;
    }

    let t0 = Instant::now();
    let trials = simulation::run(&config)?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
    let curve = PercolationCurve::from_trials(&trials, args.bins)?;

    println!("Simulation: {:.1}ms\n", elapsed_ms);
    print!("{}", curve);

    match curve.threshold_estimate() {
        Some(p) => println!("\nEstimated threshold (fraction = 0.5): p = {:.4}", p),
        None => println!("\nEstimated threshold: no crossing of 0.5 observed"),
    }

    if let Some(path) = &args.csv {
        let mut writer = BufWriter::new(File::create(path)?);
        curve.write_csv(&mut writer)?;
        writer.flush()?;
        println!("Wrote curve to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
