//! Utility modules for timing, sweeping and reporting.

pub mod runner;
pub mod sysinfo;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use runner::{comparison_rows, run_sweep, ComparisonRow, SweepEvent, TimingResult};
pub use sysinfo::SystemInfo;
pub use timer::{measure, Measured, StrategyTimings};
