//! Tracing initialization and launch-phase span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` for launcher diagnostics on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording start and finish of a launch phase.
pub struct PhaseSpan {
    span: Span,
    started_at: Instant,
    phase: &'static str,
}

impl PhaseSpan {
    pub fn start(phase: &'static str) -> Self {
        let span = info_span!(target: "kc::runtime", "launch_phase", phase);
        {
            let _entered = span.enter();
            info!(target: "kc::runtime", phase, "Starting launch phase");
        }
        Self {
            span,
            started_at: Instant::now(),
            phase,
        }
    }

    /// Close the span, recording the exit code if the process ran.
    pub fn finish(self, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "kc::runtime",
            phase = self.phase,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed launch phase"
        );
    }
}

/// Payload describing an assembled command line.
#[derive(Debug, Serialize)]
pub struct InvocationTelemetry<'a> {
    pub phase: &'a str,
    pub program: &'a str,
    pub command_line: &'a str,
    pub argc: usize,
}

/// Emit the command line about to be started.
pub fn emit_invocation(telemetry: &InvocationTelemetry<'_>) {
    let payload = serde_json::to_string(telemetry).unwrap_or_default();
    debug!(
        target: "kc::runtime",
        phase = telemetry.phase,
        program = telemetry.program,
        argc = telemetry.argc,
        invocation = %payload,
        "Assembled command line"
    );
}
