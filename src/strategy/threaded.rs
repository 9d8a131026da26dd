use std::thread;

use log::trace;

use super::{Strategy, StrategyKind};
use crate::error::{BenchError, Result};
use crate::operation::Operation;

/// Name given to the spawned worker thread
pub const WORKER_THREAD_NAME: &str = "dispatch-worker";

/// Runs the operation on one spawned thread sharing the caller's memory.
///
/// The worker writes its output into a single slot owned by the caller.
/// The slot is written once, by the worker, and read once, by the caller
/// after `join`; the join is the only synchronization.
pub struct Threaded;

impl Strategy for Threaded {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Threaded
    }

    fn description(&self) -> &'static str {
        "One spawned thread, output handed back through a shared slot"
    }

    fn execute(&self, operation: Operation, data: &[i64]) -> Result<Vec<i64>> {
        let mut slot: Option<Vec<i64>> = None;

        thread::scope(|scope| {
            let slot = &mut slot;
            let handle = thread::Builder::new()
                .name(WORKER_THREAD_NAME.to_string())
                .spawn_scoped(scope, move || {
                    *slot = Some(operation.apply(data));
                })
                .map_err(|source| BenchError::Spawn {
                    strategy: StrategyKind::Threaded,
                    source,
                })?;

            trace!("joining {} for {}", WORKER_THREAD_NAME, operation);
            handle.join().map_err(|_| BenchError::WorkerPanicked {
                strategy: StrategyKind::Threaded,
            })
        })?;

        slot.ok_or(BenchError::WorkerPanicked {
            strategy: StrategyKind::Threaded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threaded_matches_direct_call() {
        let data: Vec<i64> = (0..1000).rev().collect();
        for op in Operation::ALL {
            assert_eq!(Threaded.execute(op, &data).unwrap(), op.apply(&data));
        }
    }

    #[test]
    fn test_threaded_empty() {
        assert!(Threaded.execute(Operation::Sort, &[]).unwrap().is_empty());
    }
}
