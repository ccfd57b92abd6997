//! Resolve the launcher configuration from the environment and CLI.
use crate::{
    cli::{merge_cli_args, LaunchProfile},
    lib::{env::EnvLookup, errors::LaunchError, paths::InstallRoot},
};

pub mod debug;
pub mod java;
pub mod options;
pub mod telemetry;

pub use debug::{resolve_debug, DebugSettings, DEFAULT_DEBUG_PORT};
pub use java::{
    resolve_java_command, resolve_java_options, ConfigNotice, JavaOptions, DEFAULT_JAVA_OPTS,
};
pub use options::{build_runtime_options, seed_config_args, ConfigArgs, RuntimeOptions};

/// Everything needed to assemble the server command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub install_root: InstallRoot,
    pub java_command: String,
    pub java_options: String,
    pub runtime_options: RuntimeOptions,
    pub config_args: ConfigArgs,
    pub debug: DebugSettings,
    pub notices: Vec<ConfigNotice>,
}

impl LauncherConfig {
    /// Resolve from an environment lookup and the parsed CLI.
    ///
    /// Fails only on malformed environment values; notices are logged and kept.
    pub fn resolve(
        env: &impl EnvLookup,
        install_root: InstallRoot,
        profile: &LaunchProfile,
    ) -> Result<Self, LaunchError> {
        let mut runtime_options = build_runtime_options(&install_root);
        let debug = resolve_debug(env, profile)?;

        let mut config_args = seed_config_args(env);
        let merged = merge_cli_args(&profile.args);
        config_args.extend(merged.config_args);
        runtime_options.extend(merged.runtime_options);

        let java_command = resolve_java_command(env);
        let JavaOptions {
            value: java_options,
            notices,
        } = resolve_java_options(env, &debug);
        for notice in &notices {
            telemetry::log_notice(notice);
        }

        let config = Self {
            install_root,
            java_command,
            java_options,
            runtime_options,
            config_args,
            debug,
            notices,
        };
        telemetry::log_resolved(&config);
        Ok(config)
    }
}
