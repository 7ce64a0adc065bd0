//! Runs the naive and blocked kernels once each, then reports every check.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tilebench::{
    BLOCK_SIZE, BenchResults, PerfPolicy, RunConfig, SIZE, SummaryGuard, run_suite, standard_suite,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrecisionArg {
    F32,
    F64,
}

/// Naive vs cache-blocked square matrix multiplication
#[derive(Parser, Debug)]
#[command(name = "tilebench")]
#[command(version)]
struct Args {
    /// Matrix dimension N
    #[arg(short = 'n', long, default_value_t = SIZE)]
    size: usize,

    /// Tile edge used by the blocked kernel
    #[arg(short, long, default_value_t = BLOCK_SIZE)]
    block_size: usize,

    /// Element type of the matrices
    #[arg(long, value_enum, default_value_t = PrecisionArg::F64)]
    precision: PrecisionArg,

    /// Report failing performance checks without failing the run
    #[arg(long)]
    advisory_perf: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match execute(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(args: &Args) -> Result<u8> {
    let config = RunConfig::new(args.size, args.block_size).context("invalid run configuration")?;
    info!(
        size = config.size(),
        block_size = config.block_size(),
        precision = ?args.precision,
        "collecting results"
    );

    let results = match args.precision {
        PrecisionArg::F32 => BenchResults::collect::<f32>(&config),
        PrecisionArg::F64 => BenchResults::collect::<f64>(&config),
    };

    // Dropped at the end of this function, after the report is printed.
    let guard = SummaryGuard::new(results);

    let policy = if args.advisory_perf {
        PerfPolicy::Advisory
    } else {
        PerfPolicy::Strict
    };
    let report = run_suite(&standard_suite(), guard.results(), policy);
    print!("{report}");

    Ok(report.exit_code())
}
