//! Command-line front end: `robot_navigation <FILE> <METHOD>`.
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use robot_navigation::driver::navigate;
use robot_navigation::observer::{Animator, NoopObserver, Paced};
use robot_navigation::{Algorithm, Environment, Heuristic};

/// Navigates a robot through a grid environment with the selected search method.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Environment file.
    filename: PathBuf,

    /// One of BFS, DFS, GBFS, AS, IDDFS, CUS1, CUS2, BDAS or JPS.
    method: String,

    /// Heuristic for the informed methods: manhattan, euclidean, chebyshev or octile.
    #[arg(long, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Draw every expansion to stderr.
    #[arg(long)]
    animate: bool,

    /// Pause after each drawn expansion, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 100)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = CliArgs::parse();

    let algorithm: Algorithm = args.method.parse()?;
    let environment = Environment::load(&args.filename)
        .with_context(|| format!("failed to load {}", args.filename.display()))?;
    let grid = environment
        .to_grid()
        .with_context(|| format!("invalid environment in {}", args.filename.display()))?;
    info!("Running {} on {}", algorithm, args.filename.display());

    let report = if args.animate {
        let mut observer = Paced::new(
            Animator::new(&grid, io::stderr()),
            Duration::from_millis(args.delay_ms),
        );
        navigate(&grid, algorithm, args.heuristic, &mut observer)
    } else {
        navigate(&grid, algorithm, args.heuristic, &mut NoopObserver)
    };

    println!(
        "{}",
        report.format(&args.filename.display().to_string(), &args.method)
    );
    Ok(())
}
