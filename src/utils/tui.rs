//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use std::time::Duration;

use terminal_size::{terminal_size, Width};

use crate::operation::Operation;
use crate::strategy::StrategyKind;
use crate::registry::StrategyRegistry;
use crate::utils::runner::{ComparisonRow, SweepEvent};
use crate::utils::sysinfo::SystemInfo;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn secs(d: Duration) -> f64 {
    d.as_secs_f64()
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Dispatch Overhead Benchmarks ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
}

/// Print the dataset summary line
pub fn print_dataset(path: &str, column: &str, count: usize) {
    println!();
    println!("Dataset: {} (column '{}', {} values)", path, column, count);
}

/// Format the list of strategies that will be timed
pub fn format_strategies(registry: &StrategyRegistry) -> String {
    let mut out = String::from("Strategies:\n");
    for strategy in registry.all() {
        out.push_str(&format!(
            "  {:<14} {}\n",
            strategy.kind().name(),
            strategy.description()
        ));
    }
    out
}

pub fn print_strategies(registry: &StrategyRegistry) {
    print!("{}", format_strategies(registry));
}

fn strategy_label(kind: StrategyKind) -> &'static str {
    match kind {
        StrategyKind::Sequential => "Sequential:     ",
        StrategyKind::Threaded => "Threaded:       ",
        StrategyKind::Multiprocess => "Multiprocessing:",
    }
}

/// Format one progress event: a heading when a split starts, then one
/// line per strategy as it finishes
pub fn format_sweep_event(event: &SweepEvent<'_>) -> String {
    match *event {
        SweepEvent::SplitStarted { operation, split } => {
            format!("\n--- {} {} ---\n", operation.verb(), split)
        }
        SweepEvent::Measured {
            strategy, elapsed, ..
        } => format!("{}{:.4} seconds\n", strategy_label(strategy), secs(elapsed)),
    }
}

pub fn print_sweep_event(event: &SweepEvent<'_>) {
    print!("{}", format_sweep_event(event));
}

/// Format the comparison table for one operation
pub fn format_comparison_table(operation: Operation, rows: &[ComparisonRow]) -> String {
    let mut out = format!("\n=== {} Comparison Table ===\n", operation.verb());
    out.push_str(&format!(
        "{:<8}{:<15}{:<15}{}\n",
        "Size", "Sequential", "Threaded", "Multiprocessing"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<8}{:<15.4}{:<15.4}{:.4}\n",
            row.split,
            secs(row.timings.sequential),
            secs(row.timings.threaded),
            secs(row.timings.multiprocess)
        ));
    }
    out
}

pub fn print_comparison_table(operation: Operation, rows: &[ComparisonRow]) {
    print!("{}", format_comparison_table(operation, rows));
}

/// Format the host information section
pub fn format_system_info(info: &SystemInfo) -> String {
    let mut out = String::from("\n--- System Info ---\n");
    out.push_str(&format!("Processor: {}\n", info.processor));
    match info.memory_gib() {
        Some(gib) => out.push_str(&format!("RAM: {:.2} GB\n", gib)),
        None => out.push_str("RAM: unknown\n"),
    }
    if let Some(cores) = info.logical_cores {
        out.push_str(&format!("Cores: {}\n", cores));
    }
    out
}

pub fn print_system_info(info: &SystemInfo) {
    print!("{}", format_system_info(info));
}

/// Print the help message
pub fn print_help() {
    println!("Usage: dispatch-bench [OPTIONS] [DATASET]");
    println!();
    println!("Times filter and sort over 25/50/75/100% of a CSV column, each run");
    println!("sequentially, on one spawned thread, and in one child process.");
    println!();
    println!("Options:");
    println!("  --column NAME  Column to benchmark (default: trip_duration)");
    println!("  --help, -h     Show this help message");
    println!();
    println!("Arguments:");
    println!("  DATASET        CSV file to load (default: train.csv)");
    println!();
    println!("Set RUST_LOG=debug for per-strategy details on stderr.");
}
