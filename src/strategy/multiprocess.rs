use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use super::worker;
use super::{Strategy, StrategyKind};
use crate::error::{BenchError, Result, TransferError};
use crate::operation::Operation;

/// Argument that switches the benchmark binary into worker mode
pub const WORKER_ARG: &str = "__worker";

/// How to launch a worker process
#[derive(Clone, Debug)]
pub struct WorkerCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl WorkerCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Re-launch the running executable in worker mode
    pub fn current_exe() -> io::Result<Self> {
        Ok(Self::new(env::current_exe()?).arg(WORKER_ARG))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

/// Runs the operation in one child process with its own memory.
///
/// Input goes over the child's stdin and output comes back over its
/// stdout, both JSON encoded. The call returns after the child has exited.
pub struct Multiprocess {
    worker: WorkerCommand,
}

impl Multiprocess {
    pub fn new(worker: WorkerCommand) -> Self {
        Self { worker }
    }
}

impl Strategy for Multiprocess {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Multiprocess
    }

    fn description(&self) -> &'static str {
        "One child process, data marshaled over pipes"
    }

    fn execute(&self, operation: Operation, data: &[i64]) -> Result<Vec<i64>> {
        let mut child = self
            .worker
            .command()
            .spawn()
            .map_err(|source| BenchError::Spawn {
                strategy: StrategyKind::Multiprocess,
                source,
            })?;
        debug!(
            "spawned {} as pid {} for {} of {} values",
            self.worker.program().display(),
            child.id(),
            operation,
            data.len()
        );

        // A worker that dies early breaks the pipe; its exit status is the
        // better error, so the write result is checked after reaping it.
        let sent = match child.stdin.take() {
            Some(stdin) => worker::write_request(stdin, operation, data),
            None => Err(TransferError::MissingPipe("stdin")),
        };

        let output = child.wait_with_output().map_err(TransferError::from)?;
        if !output.status.success() {
            return Err(BenchError::WorkerFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        sent?;

        Ok(worker::read_response(&output.stdout[..])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failure_is_reported() {
        let strategy = Multiprocess::new(WorkerCommand::new("/nonexistent/dispatch-worker"));
        let err = strategy.execute(Operation::Filter, &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            BenchError::Spawn {
                strategy: StrategyKind::Multiprocess,
                ..
            }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_worker_is_reported() {
        let strategy = Multiprocess::new(WorkerCommand::new("false"));
        let err = strategy.execute(Operation::Sort, &[3, 2, 1]).unwrap_err();
        assert!(matches!(err, BenchError::WorkerFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_garbage_output_is_transfer_error() {
        // `echo` ignores stdin and answers with something that is not JSON
        let strategy = Multiprocess::new(WorkerCommand::new("echo").arg("not json"));
        let err = strategy.execute(Operation::Sort, &[]).unwrap_err();
        assert!(matches!(err, BenchError::Transfer(_)));
    }

    #[test]
    fn test_current_exe_uses_worker_arg() {
        let cmd = WorkerCommand::current_exe().unwrap();
        assert_eq!(cmd.args, vec![OsString::from(WORKER_ARG)]);
    }
}
