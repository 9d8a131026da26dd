//! Execution strategies.
//!
//! Each strategy runs one [`Operation`] over the whole input exactly once
//! and returns the complete output. They differ only in where the work
//! happens: the calling thread, one spawned thread, or one child process.

pub mod multiprocess;
pub mod sequential;
pub mod threaded;
pub mod worker;

pub use multiprocess::{Multiprocess, WorkerCommand, WORKER_ARG};
pub use sequential::Sequential;
pub use threaded::Threaded;

use std::fmt;

use crate::error::Result;
use crate::operation::Operation;

/// Identifies a strategy in results and reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Sequential,
    Threaded,
    Multiprocess,
}

impl StrategyKind {
    /// Execution order within one split
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Sequential,
        StrategyKind::Threaded,
        StrategyKind::Multiprocess,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::Threaded => "threaded",
            StrategyKind::Multiprocess => "multiprocess",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait that all execution strategies implement
pub trait Strategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Run `operation` over `data` once. Returns only after the output is
    /// fully available to the caller.
    fn execute(&self, operation: Operation, data: &[i64]) -> Result<Vec<i64>>;
}
