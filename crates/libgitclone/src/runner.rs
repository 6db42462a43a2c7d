use std::{
    ffi::OsString,
    io,
    path::Path,
    process::{Command, Output, Stdio},
};

use async_trait::async_trait;
use tokio::process::Command as AsyncCommand;

/// How a child process finished.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessExit {
    /// Exit status code, or `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
}

impl ProcessExit {
    /// Exit record for a process that terminated normally with `code`.
    pub fn with_code(code: i32) -> Self {
        Self {
            code: Some(code),
            stderr: String::new(),
        }
    }

    /// Whether the process exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<Output> for ProcessExit {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Capability for launching child processes.
///
/// This is the only platform dependency of the clone wrapper. Tests substitute
/// a fake implementation that records invocations instead of spawning them.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> io::Result<ProcessExit>;

    /// Run `program` with `args` in `cwd`, suspending the caller until it exits.
    async fn run_async(
        &self,
        program: &str,
        args: &[OsString],
        cwd: &Path,
    ) -> io::Result<ProcessExit>;
}

/// Runner that launches real processes on the host.
///
/// Standard input is closed and both output streams are captured, so the
/// child's chatter never reaches the caller's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> io::Result<ProcessExit> {
        let output = Command::new(program)
            .current_dir(cwd)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        Ok(output.into())
    }

    async fn run_async(
        &self,
        program: &str,
        args: &[OsString],
        cwd: &Path,
    ) -> io::Result<ProcessExit> {
        let output = AsyncCommand::new(program)
            .current_dir(cwd)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await?;
        Ok(output.into())
    }
}
