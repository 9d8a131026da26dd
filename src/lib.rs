//! # Dispatch-Bench
//!
//! Times two trivial list operations (filter and sort) over growing
//! prefixes of a dataset, each run three ways: directly, on one spawned
//! thread, and in one child process. The work is identical in every
//! strategy, so the differences expose thread creation, process creation
//! and data marshaling overhead.

pub mod config;
pub mod dataset;
pub mod error;
pub mod operation;
pub mod registry;
pub mod strategy;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use error::{BenchError, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::operation::Operation;
    pub use crate::registry::{build_registry, StrategyRegistry};
    pub use crate::strategy::{Strategy, StrategyKind, WorkerCommand};
    pub use crate::utils::{run_sweep, StrategyTimings, TimingResult};
}
