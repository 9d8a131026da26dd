//! End-to-end sweep over a dataset file.

use dispatch_bench::dataset::{load_column, SPLIT_FRACTIONS};
use dispatch_bench::operation::Operation;
use dispatch_bench::registry::build_registry;
use dispatch_bench::strategy::{StrategyKind, WorkerCommand, WORKER_ARG};
use dispatch_bench::utils::{comparison_rows, run_sweep, SweepEvent};
use std::io::Write;
use std::process::Command;
use std::time::Duration;

fn write_dataset(rows: usize) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id,vendor_id,trip_duration").unwrap();
    for i in 0..rows {
        writeln!(file, "id{},{},{}", i, i % 2 + 1, (i * 37) % 3500).unwrap();
    }
    file
}

#[test]
fn test_sweep_result_order() {
    let file = write_dataset(400);
    let data = load_column(file.path(), "trip_duration").unwrap();
    assert_eq!(data.len(), 400);

    let registry = build_registry(
        WorkerCommand::new(env!("CARGO_BIN_EXE_dispatch-bench")).arg(WORKER_ARG),
    );

    let mut progress = Vec::new();
    let mut measured = 0;
    let results = run_sweep(&registry, &data, &SPLIT_FRACTIONS, |event| match event {
        SweepEvent::SplitStarted { operation, split } => {
            progress.push((operation, split.to_string()))
        }
        SweepEvent::Measured { .. } => measured += 1,
    })
    .unwrap();

    assert_eq!(results.len(), 2 * 4 * 3);
    assert_eq!(progress.len(), 8);
    assert_eq!(measured, results.len());
    assert_eq!(progress[0], (Operation::Filter, "25%".to_string()));
    assert_eq!(progress[7], (Operation::Sort, "100%".to_string()));

    let strategies: Vec<StrategyKind> = results.iter().take(3).map(|r| r.strategy).collect();
    assert_eq!(strategies, StrategyKind::ALL);
    assert!(results.iter().all(|r| r.elapsed >= Duration::ZERO));

    for op in Operation::ALL {
        let labels: Vec<String> = comparison_rows(&results, op)
            .into_iter()
            .map(|row| row.split)
            .collect();
        assert_eq!(labels, ["25%", "50%", "75%", "100%"]);
    }
}

#[test]
fn test_sweep_stops_on_worker_failure() {
    let registry = build_registry(WorkerCommand::new("/nonexistent/dispatch-worker"));
    let mut shown = Vec::new();
    let err = run_sweep(&registry, &[1, 2, 3, 4], &SPLIT_FRACTIONS, |event| {
        shown.push(match event {
            SweepEvent::SplitStarted { split, .. } => format!("heading {}", split),
            SweepEvent::Measured { strategy, .. } => format!("line {}", strategy),
        })
    })
    .unwrap_err();

    // Timings taken before the spawn failure are still reported
    assert!(err.to_string().contains("failed to spawn multiprocess worker"));
    assert_eq!(shown, ["heading 25%", "line sequential", "line threaded"]);
}

#[test]
fn test_binary_prints_tables() {
    let file = write_dataset(200);
    let output = Command::new(env!("CARGO_BIN_EXE_dispatch-bench"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Strategies:"));
    assert!(stdout.contains("--- Filtering 25% ---\nSequential:     "));
    assert!(stdout.contains("=== Filtering Comparison Table ==="));
    assert!(stdout.contains("=== Sorting Comparison Table ==="));
    assert!(stdout.contains("--- System Info ---"));
    assert!(stdout.find("Sorting Comparison").unwrap() < stdout.find("System Info").unwrap());
}

#[test]
fn test_binary_missing_dataset_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_dispatch-bench"))
        .arg("/nonexistent/train.csv")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: loading"));
}
