//! Time each stack operation at increasing stack sizes.
//!
//! Writes one CSV row per size and operation to stdout, with the mean time
//! per call in seconds.

use std::hint::black_box;
use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use minmax_stack::{ExtremaStack, MinMaxStack, NaiveMinMaxStack, Operation};
use rand::{distributions::Uniform, prelude::Distribution, rngs::StdRng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Push/pop pairs run on every stack before timing starts.
const WARMUP_ROUNDS: usize = 10_000;

/// Largest stack on which the naive stack's linear scans are timed.
const NAIVE_SCAN_LIMIT: usize = 10_000;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    // Stack sizes, comma separated
    #[arg(short = 's', long, value_delimiter = ',')]
    #[arg(default_value = "10,100,1000,5000,10000,50000,100000,500000,1000000")]
    sizes: Vec<usize>,

    // Number of trials averaged per measurement
    #[arg(short = 't', long, value_parser = clap::value_parser!(u32).range(1..))]
    #[arg(default_value_t = 5)]
    trials: u32,

    // Random seed
    #[arg(long)]
    #[arg(default_value_t = 1234)]
    seed: u64,

    // Time the scanning reference stack instead
    #[arg(long)]
    naive: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    if args.sizes.contains(&0) {
        anyhow::bail!("stack sizes must be positive");
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let implementation = if args.naive { "naive" } else { "minmax" };
    let mut wtr = csv::Writer::from_writer(io::stdout());
    wtr.write_record(["implementation", "size", "operation", "seconds_per_op"])?;

    for &size in &args.sizes {
        info!(size, implementation, "timing operations");
        for op in Operation::ALL {
            if args.naive && matches!(op, Operation::Min | Operation::Max) && size > NAIVE_SCAN_LIMIT
            {
                warn!(size, %op, "skipping linear scan on large stack");
                continue;
            }
            let total: Duration = (0..args.trials)
                .map(|_| {
                    if args.naive {
                        time_operation::<NaiveMinMaxStack<i64>>(op, size, &mut rng)
                    } else {
                        time_operation::<MinMaxStack<i64>>(op, size, &mut rng)
                    }
                })
                .sum();
            let per_op = total.as_secs_f64() / (f64::from(args.trials) * size as f64);
            wtr.write_record([
                implementation.to_string(),
                size.to_string(),
                op.to_string(),
                format!("{per_op:e}"),
            ])?;
        }
        wtr.flush()?;
    }
    Ok(())
}

/// Time `size` consecutive calls of `op`.
///
/// For every operation but push, the stack is first filled with `size` random
/// values, so that it never runs empty while being timed.
fn time_operation<S>(op: Operation, size: usize, rng: &mut StdRng) -> Duration
where
    S: ExtremaStack<i64> + Default,
{
    let values = Uniform::new_inclusive(1, 100_000);
    let mut stack = S::default();
    if op != Operation::Push {
        for _ in 0..size {
            stack.push(values.sample(rng));
        }
    }
    for _ in 0..WARMUP_ROUNDS {
        stack.push(values.sample(rng));
        let _ = stack.pop();
    }
    let batch: Vec<i64> = match op {
        Operation::Push => (0..size).map(|_| values.sample(rng)).collect(),
        _ => Vec::new(),
    };

    let start = Instant::now();
    match op {
        Operation::Push => {
            for value in batch {
                stack.push(value);
            }
        }
        Operation::Pop => {
            for _ in 0..size {
                let _ = black_box(stack.pop());
            }
        }
        Operation::Top => {
            for _ in 0..size {
                let _ = black_box(stack.top());
            }
        }
        Operation::Min => {
            for _ in 0..size {
                let _ = black_box(stack.min());
            }
        }
        Operation::Max => {
            for _ in 0..size {
                let _ = black_box(stack.max());
            }
        }
    }
    start.elapsed()
}
