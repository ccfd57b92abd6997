//! LaunchProfile and classification of unmatched CLI arguments.

/// Convenience token that expands into the dev-profile sequence.
pub const START_DEV_TOKEN: &str = "start-dev";
/// Marker in the config args that requests a build phase.
pub const AUTO_BUILD_FLAG: &str = "--auto-build";
/// Config args appended for each `start-dev` token.
pub const DEV_PROFILE_ARGS: [&str; 3] = ["--profile=dev", START_DEV_TOKEN, AUTO_BUILD_FLAG];

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchProfile {
    /// `--debug` was given, with or without a port.
    pub debug_requested: bool,
    pub debug_port: Option<u16>,
    /// Unmatched arguments in the order given.
    pub args: Vec<String>,
}

/// Unmatched CLI arguments split by destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedArgs {
    pub config_args: Vec<String>,
    pub runtime_options: Vec<String>,
}

/// Classify unmatched arguments; each token lands in exactly one list.
pub fn merge_cli_args<I, S>(args: I) -> MergedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged = MergedArgs::default();
    for arg in args {
        let arg = arg.as_ref();
        if arg == START_DEV_TOKEN {
            merged
                .config_args
                .extend(DEV_PROFILE_ARGS.iter().map(|token| token.to_string()));
        } else {
            merged.runtime_options.push(arg.to_string());
        }
    }
    merged
}
