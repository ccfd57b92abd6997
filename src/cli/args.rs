//! CLI argument definitions and `LaunchProfile` construction.
use clap::{error::ErrorKind, CommandFactory, Parser};

use super::LaunchProfile;

const DEBUG_FLAG: &str = "--debug";

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kc",
    version,
    about = "Start the kc application server",
    long_about = None,
    after_help = "Arguments other than `start-dev` and `--debug` are passed to the Java runtime unchanged.\n`start-dev` runs the server in the dev profile, building it first."
)]
pub struct KcArgs {
    /// Enable the JDWP debug agent, optionally on PORT (default: DEBUG_PORT or 8787).
    #[arg(
        long = "debug",
        value_name = "PORT",
        num_args = 0..=1,
        require_equals = true
    )]
    pub debug: Option<Option<u16>>,
    /// Server arguments and runtime options.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl KcArgs {
    /// Build the profile, picking up `--debug[=PORT]` wherever it appears.
    ///
    /// clap stops matching options once the first unmatched argument is seen,
    /// so later debug flags are taken out of `args` here.
    pub fn into_profile(self) -> Result<LaunchProfile, clap::Error> {
        let mut debug = self.debug;
        let mut args = Vec::with_capacity(self.args.len());

        for arg in self.args {
            match debug_flag_value(&arg) {
                Some(Ok(port)) => debug = Some(port.or(debug.flatten())),
                Some(Err(message)) => {
                    return Err(Self::command().error(ErrorKind::ValueValidation, message))
                }
                None => args.push(arg),
            }
        }

        Ok(LaunchProfile {
            debug_requested: debug.is_some(),
            debug_port: debug.flatten(),
            args,
        })
    }
}

/// `None` when `arg` is not a debug flag; otherwise its optional port.
fn debug_flag_value(arg: &str) -> Option<Result<Option<u16>, String>> {
    if arg == DEBUG_FLAG {
        return Some(Ok(None));
    }
    let value = arg.strip_prefix(DEBUG_FLAG)?.strip_prefix('=')?;
    Some(
        value
            .parse::<u16>()
            .map(Some)
            .map_err(|err| format!("invalid value '{value}' for '{DEBUG_FLAG}[=<PORT>]': {err}")),
    )
}
