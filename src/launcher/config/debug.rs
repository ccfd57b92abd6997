use crate::{cli::LaunchProfile, lib::env::EnvLookup, lib::errors::LaunchError};

pub const DEBUG_ENV: &str = "DEBUG";
pub const DEBUG_PORT_ENV: &str = "DEBUG_PORT";
pub const DEBUG_SUSPEND_ENV: &str = "DEBUG_SUSPEND";
pub const DEFAULT_DEBUG_PORT: u16 = 8787;
pub const DEFAULT_DEBUG_SUSPEND: &str = "n";

/// Remote debug agent settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugSettings {
    pub enabled: bool,
    pub port: u16,
    pub suspend: String,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            port: DEFAULT_DEBUG_PORT,
            suspend: DEFAULT_DEBUG_SUSPEND.to_string(),
        }
    }
}

/// Combine `DEBUG*` variables with the `--debug` flag.
///
/// Debug is on when `DEBUG` is `true` or `--debug` was given at all. The port
/// comes from `--debug=PORT`, then `DEBUG_PORT`, then 8787. A `DEBUG_PORT`
/// that does not parse is an error even when debug stays off.
pub fn resolve_debug(
    env: &impl EnvLookup,
    profile: &LaunchProfile,
) -> Result<DebugSettings, LaunchError> {
    let env_enabled = env.var(DEBUG_ENV).is_some_and(|value| parse_bool(&value));
    let enabled = env_enabled || profile.debug_requested;

    let env_port = env
        .var(DEBUG_PORT_ENV)
        .map(|value| {
            value
                .parse::<u16>()
                .map_err(|source| LaunchError::InvalidEnv {
                    name: DEBUG_PORT_ENV,
                    value,
                    source,
                })
        })
        .transpose()?;
    let port = profile
        .debug_port
        .or(env_port)
        .unwrap_or(DEFAULT_DEBUG_PORT);

    let suspend = env
        .var(DEBUG_SUSPEND_ENV)
        .unwrap_or_else(|| DEFAULT_DEBUG_SUSPEND.to_string());

    Ok(DebugSettings {
        enabled,
        port,
        suspend,
    })
}

/// Only a case-insensitive `true` is true; anything else is false.
fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
