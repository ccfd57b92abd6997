//! Runtime options and config args token lists.
use crate::{
    cli::AUTO_BUILD_FLAG,
    lib::{env::EnvLookup, paths::InstallRoot},
};

pub const CONFIG_ARGS_ENV: &str = "CONFIG_ARGS";
pub const LOG_MANAGER_OPTION: &str = "-Djava.util.logging.manager=org.jboss.logmanager.LogManager";
pub const STARTUP_LOG_BUFFER_OPTION: &str = "-Dquarkus-log-max-startup-records=10000";

/// Flags for the Java runtime itself. Later entries may override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeOptions(Vec<String>);

/// Arguments for the server's own argument parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigArgs(Vec<String>);

macro_rules! token_list {
    ($name:ident) => {
        impl $name {
            pub fn push(&mut self, token: impl Into<String>) {
                self.0.push(token.into());
            }

            pub fn extend<I, S>(&mut self, tokens: I)
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.0.extend(tokens.into_iter().map(Into::into));
            }

            pub fn tokens(&self) -> &[String] {
                &self.0
            }

            pub fn contains(&self, token: &str) -> bool {
                self.0.iter().any(|t| t == token)
            }

            /// Tokens joined with single spaces.
            pub fn joined(&self) -> String {
                self.0.join(" ")
            }
        }

        impl<S: Into<String>> FromIterator<S> for $name {
            fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
                Self(iter.into_iter().map(Into::into).collect())
            }
        }
    };
}

token_list!(RuntimeOptions);
token_list!(ConfigArgs);

impl ConfigArgs {
    /// True when a build phase has to run before the server starts.
    ///
    /// Matches anywhere in the joined args, so `--auto-build=true` counts too.
    pub fn requests_auto_build(&self) -> bool {
        self.joined().contains(AUTO_BUILD_FLAG)
    }
}

/// The four options every launch carries.
pub fn build_runtime_options(install_root: &InstallRoot) -> RuntimeOptions {
    RuntimeOptions::from_iter([
        format!("-Dkc.home.dir={}", install_root.path().display()),
        format!(
            "-Djboss.server.config.dir={}",
            install_root.conf_dir().display()
        ),
        LOG_MANAGER_OPTION.to_string(),
        STARTUP_LOG_BUFFER_OPTION.to_string(),
    ])
}

/// Seed config args from space-separated `CONFIG_ARGS`.
pub fn seed_config_args(env: &impl EnvLookup) -> ConfigArgs {
    env.var(CONFIG_ARGS_ENV)
        .map(|value| {
            value
                .split(' ')
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
