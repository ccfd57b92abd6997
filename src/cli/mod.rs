//! CLI argument surface and `start-dev` expansion.

pub mod args;
pub mod profile;

pub use args::KcArgs;
pub use profile::{
    merge_cli_args, LaunchProfile, MergedArgs, AUTO_BUILD_FLAG, DEV_PROFILE_ARGS, START_DEV_TOKEN,
};
