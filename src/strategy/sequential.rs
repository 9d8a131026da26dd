use super::{Strategy, StrategyKind};
use crate::error::Result;
use crate::operation::Operation;

/// Runs the operation directly on the calling thread
pub struct Sequential;

impl Strategy for Sequential {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Sequential
    }

    fn description(&self) -> &'static str {
        "Direct call on the calling thread"
    }

    fn execute(&self, operation: Operation, data: &[i64]) -> Result<Vec<i64>> {
        Ok(operation.apply(data))
    }
}
