//! Java executable and Java options resolution.
use std::path::Path;

use crate::lib::{env::EnvLookup, paths::absolutize};

use super::debug::DebugSettings;

pub const JAVA_ENV: &str = "JAVA";
pub const JAVA_HOME_ENV: &str = "JAVA_HOME";
pub const JAVA_OPTS_ENV: &str = "JAVA_OPTS";
pub const JAVA_OPTS_APPEND_ENV: &str = "JAVA_OPTS_APPEND";
pub const DEFAULT_JAVA_COMMAND: &str = "java";
pub const DEFAULT_JAVA_OPTS: &str = "-Xms64m -Xmx512m -XX:MetaspaceSize=96M -XX:MaxMetaspaceSize=256m -Djava.net.preferIPv4Stack=true -Dfile.encoding=UTF-8";
pub const DEBUG_AGENT_MARKER: &str = "-agentlib:jdwp";

/// Non-fatal conditions surfaced while resolving options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigNotice {
    /// `JAVA_OPTS` replaced the default tuning string.
    JavaOptsOverride { value: String },
    /// Debug was requested but `-agentlib:jdwp` is already configured.
    DebugAlreadyConfigured,
}

impl std::fmt::Display for ConfigNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigNotice::JavaOptsOverride { value } => write!(
                f,
                "JAVA_OPTS already set in environment; overriding default settings with values: {value}"
            ),
            ConfigNotice::DebugAlreadyConfigured => f.write_str(
                "Debug already enabled in JAVA_OPTS, ignoring --debug argument",
            ),
        }
    }
}

/// Resolved Java options and the notices produced on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaOptions {
    pub value: String,
    pub notices: Vec<ConfigNotice>,
}

/// `JAVA`, else `$JAVA_HOME/bin/java`, else `java` from `PATH`.
pub fn resolve_java_command(env: &impl EnvLookup) -> String {
    if let Some(java) = env.var(JAVA_ENV) {
        return java;
    }
    if let Some(java_home) = env.var(JAVA_HOME_ENV) {
        let executable = format!("java{}", std::env::consts::EXE_SUFFIX);
        let path = Path::new(&java_home).join("bin").join(executable);
        return absolutize(&path).to_string_lossy().into_owned();
    }
    DEFAULT_JAVA_COMMAND.to_string()
}

/// Build the Java options string.
pub fn resolve_java_options(env: &impl EnvLookup, debug: &DebugSettings) -> JavaOptions {
    let mut notices = Vec::new();

    let mut value = match env.var(JAVA_OPTS_ENV) {
        Some(java_opts) => {
            notices.push(ConfigNotice::JavaOptsOverride {
                value: java_opts.clone(),
            });
            java_opts
        }
        None => DEFAULT_JAVA_OPTS.to_string(),
    };

    if let Some(append) = env.var(JAVA_OPTS_APPEND_ENV) {
        value.push(' ');
        value.push_str(&append);
    }

    if debug.enabled {
        if value.contains(DEBUG_AGENT_MARKER) {
            notices.push(ConfigNotice::DebugAlreadyConfigured);
        } else {
            if !value.is_empty() && !value.ends_with(' ') {
                value.push(' ');
            }
            value.push_str(&debug_agent_flag(debug));
        }
    }

    JavaOptions { value, notices }
}

pub fn debug_agent_flag(debug: &DebugSettings) -> String {
    format!(
        "{DEBUG_AGENT_MARKER}=transport=dt_socket,address={},server=y,suspend={}",
        debug.port, debug.suspend
    )
}
