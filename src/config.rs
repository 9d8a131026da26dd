//! Run configuration and command-line parsing.

use std::path::PathBuf;

use crate::dataset::{DEFAULT_COLUMN, DEFAULT_PATH, SPLIT_FRACTIONS};
use crate::strategy::WORKER_ARG;

/// Settings for one benchmark sweep
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    /// CSV file holding the dataset
    pub dataset: PathBuf,
    /// Column to load from it
    pub column: String,
    /// Split fractions, in sweep order
    pub fractions: Vec<f64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_PATH),
            column: DEFAULT_COLUMN.to_string(),
            fractions: SPLIT_FRACTIONS.to_vec(),
        }
    }
}

/// What the binary was asked to do
#[derive(Clone, Debug, PartialEq)]
pub enum Invocation {
    Sweep(BenchConfig),
    Help,
    /// Serve one multiprocess request over stdin/stdout
    Worker,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config = BenchConfig::default();
    let mut dataset_seen = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            WORKER_ARG => return Ok(Invocation::Worker),
            "--help" | "-h" => return Ok(Invocation::Help),
            "--column" => {
                config.column = args
                    .next()
                    .ok_or_else(|| "--column needs a value".to_string())?;
            }
            other if !other.starts_with('-') => {
                if dataset_seen {
                    return Err(format!("unexpected argument: {}", other));
                }
                config.dataset = PathBuf::from(other);
                dataset_seen = true;
            }
            other => return Err(format!("unknown option: {}", other)),
        }
    }

    Ok(Invocation::Sweep(config))
}
