//! Strategy registry.
//!
//! Holds the execution strategies in the order the harness runs them and
//! checks that they all agree with the sequential reference.

use crate::error::{BenchError, Result};
use crate::operation::Operation;
use crate::strategy::{Multiprocess, Sequential, Strategy, StrategyKind, Threaded, WorkerCommand};

/// Ordered collection of execution strategies
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Register a strategy
    pub fn register<S: Strategy + 'static>(&mut self, strategy: S) {
        self.strategies.push(Box::new(strategy));
    }

    /// Get all registered strategies, in registration order
    pub fn all(&self) -> &[Box<dyn Strategy>] {
        &self.strategies
    }

    /// Find strategy by kind
    pub fn find(&self, kind: StrategyKind) -> Option<&dyn Strategy> {
        self.strategies
            .iter()
            .find(|s| s.kind() == kind)
            .map(|s| s.as_ref())
    }

    /// List strategy names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.kind().name()).collect()
    }

    /// Run every operation under every strategy and compare each output
    /// with the sequential one.
    pub fn verify(&self, data: &[i64]) -> Result<()> {
        let reference = self
            .find(StrategyKind::Sequential)
            .ok_or(BenchError::MissingStrategy(StrategyKind::Sequential))?;

        for operation in Operation::ALL {
            let expected = reference.execute(operation, data)?;

            for strategy in &self.strategies {
                if strategy.kind() == StrategyKind::Sequential {
                    continue;
                }

                let got = strategy.execute(operation, data)?;
                if got != expected {
                    let index = expected
                        .iter()
                        .zip(&got)
                        .position(|(a, b)| a != b)
                        .unwrap_or_else(|| expected.len().min(got.len()));
                    return Err(BenchError::Mismatch {
                        strategy: strategy.kind(),
                        operation,
                        index,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the registry with all three strategies, in execution order
pub fn build_registry(worker: WorkerCommand) -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();

    registry.register(Sequential);
    registry.register(Threaded);
    registry.register(Multiprocess::new(worker));

    registry
}
