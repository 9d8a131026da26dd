//! Full benchmark sweep: every operation over every split fraction.

use std::time::Duration;

use log::info;

use crate::dataset::{split, split_label};
use crate::error::Result;
use crate::operation::Operation;
use crate::registry::StrategyRegistry;
use crate::strategy::StrategyKind;
use crate::utils::timer::{self, StrategyTimings};

/// Elapsed time of one (split, operation, strategy) combination
#[derive(Clone, Debug, PartialEq)]
pub struct TimingResult {
    pub split: String,
    pub operation: Operation,
    pub strategy: StrategyKind,
    pub elapsed: Duration,
}

/// One line of a comparison table
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub split: String,
    pub timings: StrategyTimings,
}

/// Progress reported while a sweep is running
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SweepEvent<'a> {
    /// A split is about to be dispatched
    SplitStarted { operation: Operation, split: &'a str },
    /// One strategy finished on the current split
    Measured {
        operation: Operation,
        split: &'a str,
        strategy: StrategyKind,
        elapsed: Duration,
    },
}

/// Run the harness for each operation and each fraction, in order.
///
/// `on_event` fires before each split is dispatched and again after every
/// strategy, so timings already taken are reported even if a later
/// strategy fails. The first error stops the sweep.
pub fn run_sweep<F>(
    registry: &StrategyRegistry,
    data: &[i64],
    fractions: &[f64],
    mut on_event: F,
) -> Result<Vec<TimingResult>>
where
    F: FnMut(SweepEvent<'_>),
{
    info!(
        "sweeping {} values over {} fractions with strategies {:?}",
        data.len(),
        fractions.len(),
        registry.list_names()
    );

    let mut results = Vec::with_capacity(Operation::ALL.len() * fractions.len() * 3);

    for operation in Operation::ALL {
        for &fraction in fractions {
            let label = split_label(fraction);
            let part = split(data, fraction)?;

            on_event(SweepEvent::SplitStarted {
                operation,
                split: &label,
            });
            let timings = timer::run_with(registry, part, operation, |strategy, elapsed| {
                on_event(SweepEvent::Measured {
                    operation,
                    split: &label,
                    strategy,
                    elapsed,
                })
            })?;

            results.extend(StrategyKind::ALL.iter().map(|&strategy| TimingResult {
                split: label.clone(),
                operation,
                strategy,
                elapsed: timings.get(strategy),
            }));
        }
    }

    Ok(results)
}

/// Fold the results of one operation back into table rows, keeping split order
pub fn comparison_rows(results: &[TimingResult], operation: Operation) -> Vec<ComparisonRow> {
    let mut rows: Vec<ComparisonRow> = Vec::new();

    for result in results.iter().filter(|r| r.operation == operation) {
        match rows.last_mut() {
            Some(row) if row.split == result.split => {
                row.timings.set(result.strategy, result.elapsed);
            }
            _ => {
                let mut timings = StrategyTimings::default();
                timings.set(result.strategy, result.elapsed);
                rows.push(ComparisonRow {
                    split: result.split.clone(),
                    timings,
                });
            }
        }
    }

    rows
}
