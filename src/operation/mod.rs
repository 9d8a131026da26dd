//! # List Operations
//!
//! The two transforms the benchmark dispatches:
//!
//! - **filter**: keep `v` where `v < 2000` and `v % 5 == 0`
//! - **sort**: ascending order, stable
//!
//! Both are pure. Every strategy runs the same kernel so outputs can be
//! compared element for element.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of operations a strategy can execute
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Filter,
    Sort,
}

impl Operation {
    /// Sweep order
    pub const ALL: [Operation; 2] = [Operation::Filter, Operation::Sort];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Filter => "filter",
            Operation::Sort => "sort",
        }
    }

    /// Gerund used in progress headings ("Filtering", "Sorting")
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Filter => "Filtering",
            Operation::Sort => "Sorting",
        }
    }

    /// Apply the operation, producing a fresh vector
    pub fn apply(self, data: &[i64]) -> Vec<i64> {
        match self {
            Operation::Filter => filter_values(data),
            Operation::Sort => sort_values(data),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
