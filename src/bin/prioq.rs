/// prioq – demo and timing tool for the prioq priority queue.
///
///   prioq                 → run the walkthrough, then the default sweep
///   prioq demo            → enqueue sample tasks and process them in order
///   prioq bench           → time enqueue/dequeue for sizes 1000..=10000
///   prioq bench --seed 1  → reproducible sweep
///   prioq -v bench        → log every measurement round
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;

use prioq::demo;
use prioq::harness::{self, BenchConfig};

#[derive(Parser, Debug)]
#[command(name = "prioq", version, about = "Binary max-heap priority queue demo and timing harness")]
struct Cli {
    /// Log every measurement round
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enqueue a few sample tasks and process them by priority
    Demo,
    /// Measure enqueue/dequeue time across growing queue sizes
    Bench(BenchArgs),
    /// Run the demo followed by the default sweep
    All,
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// First queue size
    #[arg(long, default_value_t = 1000)]
    start: usize,

    /// Last queue size (inclusive)
    #[arg(long, default_value_t = 10_000)]
    end: usize,

    /// Size increment between rows
    #[arg(long, default_value_t = 1000)]
    step: usize,

    /// Repetitions averaged per size
    #[arg(short, long, default_value_t = 5)]
    measurements: usize,

    /// Lowest random priority
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min_priority: i32,

    /// Highest random priority
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    max_priority: i32,

    /// RNG seed for reproducible inputs (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl From<BenchArgs> for BenchConfig {
    fn from(args: BenchArgs) -> Self {
        BenchConfig {
            start_size: args.start,
            end_size: args.end,
            step: args.step,
            measurements: args.measurements,
            min_priority: args.min_priority,
            max_priority: args.max_priority,
            seed: args.seed,
        }
    }
}

fn run_demo() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run_demo(&mut out).context("writing demo output")?;
    Ok(())
}

fn run_bench(config: &BenchConfig) -> Result<()> {
    debug!("bench config {config:?}");
    let timings = harness::measure(config).context("benchmark failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    writeln!(out, "=== enqueue/dequeue timing ===")?;
    write!(out, "{}", harness::render_table(&timings))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
    debug!("Args {:?}", cli);

    match cli.command.unwrap_or(Command::All) {
        Command::Demo => run_demo(),
        Command::Bench(args) => run_bench(&args.into()),
        Command::All => {
            run_demo()?;
            run_bench(&BenchConfig::default())
        }
    }
}
