//! Writes a synthetic trip dataset for the benchmark.
//!
//! Usage: generate-trips [PATH] [ROWS] [SEED]

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;

const DEFAULT_ROWS: usize = 100_000;
const DEFAULT_SEED: u64 = 42;

/// Trip duration in seconds: mostly short rides, a long tail of slow ones,
/// and the occasional multi-hour outlier.
fn trip_duration(rng: &mut StdRng) -> i64 {
    match rng.random_range(0..100) {
        0..=69 => rng.random_range(60..2000),
        70..=97 => rng.random_range(2000..7200),
        _ => rng.random_range(7200..86_400),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let path = args.first().map(String::as_str).unwrap_or("train.csv");
    let rows: usize = match args.get(1) {
        Some(s) => s.parse().with_context(|| format!("invalid row count '{}'", s))?,
        None => DEFAULT_ROWS,
    };
    let seed: u64 = match args.get(2) {
        Some(s) => s.parse().with_context(|| format!("invalid seed '{}'", s))?,
        None => DEFAULT_SEED,
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {}", path))?;

    writer.write_record(["id", "trip_duration"])?;
    for i in 0..rows {
        let duration = trip_duration(&mut rng);
        writer.write_record([format!("id{:07}", i), duration.to_string()])?;
    }
    writer.flush()?;

    log::info!("seed {}", seed);
    println!("Wrote {} trips to {}", rows, path);
    Ok(())
}
