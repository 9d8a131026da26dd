//! Benchmark entry point.
//!
//! Usage:
//!   dispatch-bench                     # train.csv, column trip_duration
//!   dispatch-bench trips.csv           # Another dataset
//!   dispatch-bench --column fare       # Another column
//!   dispatch-bench --help              # Show help
//!
//! The same binary doubles as the multiprocess worker.

use anyhow::Context;
use dispatch_bench::config::{parse_args, BenchConfig, Invocation};
use dispatch_bench::dataset::load_column;
use dispatch_bench::operation::Operation;
use dispatch_bench::registry::build_registry;
use dispatch_bench::strategy::worker::run_worker;
use dispatch_bench::strategy::WorkerCommand;
use dispatch_bench::tui;
use dispatch_bench::utils::{comparison_rows, run_sweep, SystemInfo};
use std::env;

fn main() {
    env_logger::init();

    let invocation = match parse_args(env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Try --help for usage.");
            std::process::exit(2);
        }
    };

    let outcome = match invocation {
        Invocation::Help => {
            tui::print_help();
            return;
        }
        Invocation::Worker => run_worker().context("worker failed"),
        Invocation::Sweep(config) => run(&config),
    };

    if let Err(e) = outcome {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &BenchConfig) -> anyhow::Result<()> {
    let data = load_column(&config.dataset, &config.column)
        .with_context(|| format!("loading {}", config.dataset.display()))?;

    let worker = WorkerCommand::current_exe().context("locating worker executable")?;
    let registry = build_registry(worker);

    tui::print_header();
    tui::print_dataset(
        &config.dataset.display().to_string(),
        &config.column,
        data.len(),
    );

    tui::print_strategies(&registry);

    let results = run_sweep(&registry, &data, &config.fractions, |event| {
        tui::print_sweep_event(&event)
    })
    .context("benchmark sweep aborted")?;

    for operation in Operation::ALL {
        tui::print_comparison_table(operation, &comparison_rows(&results, operation));
    }

    tui::print_system_info(&SystemInfo::collect());

    Ok(())
}
