//! Process-runner capability and the tokio-backed implementation.

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use super::errors::LaunchError;

/// A full command line, program first, tokenized on whitespace when spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine(String);

impl CommandLine {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated argv, empty tokens dropped.
    pub fn argv(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn program(&self) -> Option<&str> {
        self.argv().next()
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Starts a process with inherited stdio and environment and waits for it.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Returns the exit code once the process has terminated.
    async fn run(&mut self, command: &CommandLine) -> Result<i32, LaunchError>;
}

/// Production runner backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

impl ProcessRunner for TokioProcessRunner {
    async fn run(&mut self, command_line: &CommandLine) -> Result<i32, LaunchError> {
        let mut command = build_command(command_line)?;
        let status = command.status().await.map_err(|source| LaunchError::Spawn {
            program: command_line.program().unwrap_or_default().to_string(),
            source,
        })?;
        Ok(exit_code_of(status))
    }
}

/// Build a `Command` from a command line.
pub fn build_command(command_line: &CommandLine) -> Result<Command, LaunchError> {
    let mut tokens = command_line.argv();
    let program = tokens.next().ok_or(LaunchError::EmptyCommand)?;

    let mut command = Command::new(program);
    command.args(tokens);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    Ok(command)
}

/// Exit code of a finished process; signal deaths map to `128 + signal`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
