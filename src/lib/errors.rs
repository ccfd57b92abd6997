use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Failures that stop the launcher before or while starting the server.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The launcher's own location could not be turned into an install root.
    #[error("Failed to resolve install root from {path}: {reason}")]
    InstallRoot { path: PathBuf, reason: String },
    /// An environment variable carried a value that does not parse.
    #[error("Environment variable {name} has invalid value `{value}`: {source}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// The subprocess could not be created at all.
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The command line assembled for a phase contained no program.
    #[error("Refusing to start an empty command line")]
    EmptyCommand,
    /// The build phase exited with a non-zero status.
    #[error("Build phase exited with status {code}; not starting the server")]
    BuildFailed { code: i32 },
}

impl LaunchError {
    /// Exit code the launcher terminates with for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::BuildFailed { code } => *code,
            _ => 1,
        }
    }

    pub fn install_root(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::InstallRoot {
            path,
            reason: reason.into(),
        }
    }
}
