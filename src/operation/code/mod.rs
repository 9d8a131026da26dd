//! Operation kernels.

mod filter;
mod sort;

pub use filter::{filter_values, keeps, FILTER_DIVISOR, FILTER_LIMIT};
pub use sort::sort_values;
