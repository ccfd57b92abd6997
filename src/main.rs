//! Entry point for the `kc` launcher.
use std::process::ExitCode;

use clap::Parser;
use kc_launcher::{
    cli::KcArgs,
    launcher::runtime::{self, RuntimeExit},
    lib::{env::ProcessEnv, paths::resolve_install_root, process::TokioProcessRunner, telemetry},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let profile = KcArgs::parse()
        .into_profile()
        .unwrap_or_else(|err| err.exit());
    let install_root = resolve_install_root()?;

    let code = runtime::launch(&ProcessEnv, install_root, &profile, &mut TokioProcessRunner).await?;
    Ok(runtime::exit_code_from(code))
}
