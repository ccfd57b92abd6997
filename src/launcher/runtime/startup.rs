use std::process::ExitCode;

use anyhow::Error;
use tracing::error;

use crate::{
    cli::LaunchProfile,
    launcher::config::LauncherConfig,
    lib::{
        env::EnvLookup,
        errors::LaunchError,
        paths::InstallRoot,
        process::{CommandLine, ProcessRunner},
        telemetry::{emit_invocation, InvocationTelemetry, PhaseSpan},
    },
};

use super::{assemble_invocation, Invocation};

/// Bundles a failure message with the exit code the launcher terminates with.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<LaunchError> for RuntimeExit {
    fn from(err: LaunchError) -> Self {
        Self {
            exit_code: exit_code_from(err.exit_code()),
            message: err.to_string(),
        }
    }
}

/// Process exit codes only keep the low byte.
pub fn exit_code_from(code: i32) -> ExitCode {
    ExitCode::from((code & 0xff) as u8)
}

/// Launch phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Build,
    Run,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Build => "build",
            Phase::Run => "run",
        }
    }
}

/// Resolve configuration, then run the build and run phases.
pub async fn launch<R: ProcessRunner>(
    env: &impl EnvLookup,
    install_root: InstallRoot,
    profile: &LaunchProfile,
    runner: &mut R,
) -> Result<i32, RuntimeExit> {
    let config = LauncherConfig::resolve(env, install_root, profile)?;
    let invocation = assemble_invocation(&config);
    Ok(execute(&invocation, runner).await?)
}

/// Run the optional build phase, then the server; returns the server's exit code.
///
/// A non-zero build status stops here with [`LaunchError::BuildFailed`].
pub async fn execute<R: ProcessRunner>(
    invocation: &Invocation,
    runner: &mut R,
) -> Result<i32, LaunchError> {
    if invocation.requires_build() {
        let code = run_phase(Phase::Build, &invocation.build_command_line(), runner).await?;
        if code != 0 {
            error!(
                target: "kc::runtime",
                exit_code = code,
                "Build phase failed; server will not be started"
            );
            return Err(LaunchError::BuildFailed { code });
        }
    }

    run_phase(Phase::Run, &invocation.run_command_line(), runner).await
}

async fn run_phase<R: ProcessRunner>(
    phase: Phase,
    command_line: &CommandLine,
    runner: &mut R,
) -> Result<i32, LaunchError> {
    emit_invocation(&InvocationTelemetry {
        phase: phase.as_str(),
        program: command_line.program().unwrap_or_default(),
        command_line: command_line.as_str(),
        argc: command_line.argv().count(),
    });

    let span = PhaseSpan::start(phase.as_str());
    match runner.run(command_line).await {
        Ok(code) => {
            span.finish(Some(code));
            Ok(code)
        }
        Err(err) => {
            span.finish(None);
            Err(err)
        }
    }
}
