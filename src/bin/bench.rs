//! Prime generation benchmark
//!
//! Run with: primegen-bench [BOUND] [--trial-bound N]
//!
//! Times the sieve up to BOUND (default 50,000,000) and the trial-division baselines up to a smaller bound,
//! since brute force is quadratic.

use std::process;
use std::time::Instant;

use clap::Parser;
use primegen::version::PRIMEGEN_VERSION;
use primegen_core::{Bound, Method};

#[derive(Parser, Debug)]
#[command(name = "primegen-bench", version = PRIMEGEN_VERSION)]
#[command(about = "Time the prime generation methods", long_about = None)]
struct BenchArgs {
    /// Bound for the sieve
    #[arg(value_name = "BOUND", default_value = "50000000")]
    bound: Bound,

    /// Bound for the trial-division methods
    #[arg(long, value_name = "N", default_value = "20000")]
    trial_bound: Bound,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = BenchArgs::parse();

    if args.trial_bound > args.bound {
        eprintln!("Error: --trial-bound must not exceed BOUND");
        process::exit(1);
    }

    for method in Method::ALL {
        let bound = if method.is_baseline() { args.trial_bound } else { args.bound };
        let start = Instant::now();
        let found = method.compute(bound).len();
        let elapsed = start.elapsed();
        tracing::debug!(%method, %bound, found, ?elapsed, "benchmark run finished");
        println!("{method:>12}: {found} primes up to {bound} in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    }
}
