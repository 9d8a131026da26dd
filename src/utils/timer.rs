//! Wall-clock timing of strategy executions.
//!
//! The timer starts immediately before a strategy is dispatched and stops
//! once its output is back in the caller's hands: after the direct call,
//! after the join, or after the child process has been reaped.

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::{BenchError, Result};
use crate::operation::Operation;
use crate::registry::StrategyRegistry;
use crate::strategy::{Strategy, StrategyKind};

/// One timed execution
#[derive(Clone, Debug)]
pub struct Measured {
    pub elapsed: Duration,
    pub output: Vec<i64>,
}

/// Elapsed time of each strategy for one split and operation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StrategyTimings {
    pub sequential: Duration,
    pub threaded: Duration,
    pub multiprocess: Duration,
}

impl StrategyTimings {
    pub fn get(&self, kind: StrategyKind) -> Duration {
        match kind {
            StrategyKind::Sequential => self.sequential,
            StrategyKind::Threaded => self.threaded,
            StrategyKind::Multiprocess => self.multiprocess,
        }
    }

    pub fn set(&mut self, kind: StrategyKind, elapsed: Duration) {
        match kind {
            StrategyKind::Sequential => self.sequential = elapsed,
            StrategyKind::Threaded => self.threaded = elapsed,
            StrategyKind::Multiprocess => self.multiprocess = elapsed,
        }
    }
}

/// Time a single execution of `operation` under `strategy`.
pub fn measure(strategy: &dyn Strategy, operation: Operation, data: &[i64]) -> Result<Measured> {
    let start = Instant::now();
    let output = black_box(strategy.execute(operation, data)?);
    let elapsed = start.elapsed();

    Ok(Measured { elapsed, output })
}

/// Run `operation` over `data` under each strategy in turn.
///
/// Strategies run one after another (sequential, threaded, multiprocess),
/// never overlapping. The first failure aborts the run.
pub fn run(
    registry: &StrategyRegistry,
    data: &[i64],
    operation: Operation,
) -> Result<StrategyTimings> {
    run_with(registry, data, operation, |_, _| {})
}

/// Like [`run`], calling `on_measured` as soon as each strategy finishes,
/// before the next one is dispatched.
pub fn run_with<F>(
    registry: &StrategyRegistry,
    data: &[i64],
    operation: Operation,
    mut on_measured: F,
) -> Result<StrategyTimings>
where
    F: FnMut(StrategyKind, Duration),
{
    let mut timings = StrategyTimings::default();

    for kind in StrategyKind::ALL {
        let strategy = registry
            .find(kind)
            .ok_or(BenchError::MissingStrategy(kind))?;
        let measured = measure(strategy, operation, data)?;
        debug!(
            "{} {} of {} values: {:?} ({} out)",
            kind,
            operation,
            data.len(),
            measured.elapsed,
            measured.output.len()
        );
        timings.set(kind, measured.elapsed);
        on_measured(kind, measured.elapsed);
    }

    Ok(timings)
}
