use std::path::PathBuf;

use crate::{
    launcher::config::{ConfigArgs, LauncherConfig, RuntimeOptions},
    lib::process::CommandLine,
};

/// Main class of the server bundle.
pub const ENTRY_POINT: &str = "io.quarkus.bootstrap.runner.QuarkusEntryPoint";
/// Added in front of the Java options for the build phase.
pub const REBUILD_AND_EXIT_OPTION: &str = "-Dkc.config.rebuild-and-exit=true";

/// Fully assembled server invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub executable: String,
    pub options: String,
    pub runtime_options: RuntimeOptions,
    pub classpath_pointer: PathBuf,
    pub entry_point: &'static str,
    pub config_args: ConfigArgs,
}

pub fn assemble_invocation(config: &LauncherConfig) -> Invocation {
    Invocation {
        executable: config.java_command.clone(),
        options: config.java_options.clone(),
        runtime_options: config.runtime_options.clone(),
        classpath_pointer: config.install_root.library_pointer(),
        entry_point: ENTRY_POINT,
        config_args: config.config_args.clone(),
    }
}

impl Invocation {
    /// `<options> <runtime options> -cp <pointer> <entry point> <config args>`
    pub fn arguments(&self) -> String {
        format!(
            "{} {} -cp {} {} {}",
            self.options,
            self.runtime_options.joined(),
            self.classpath_pointer.display(),
            self.entry_point,
            self.config_args.joined()
        )
    }

    pub fn requires_build(&self) -> bool {
        self.config_args.requests_auto_build()
    }

    pub fn run_command_line(&self) -> CommandLine {
        CommandLine::new(format!("{} {}", self.executable, self.arguments()))
    }

    pub fn build_command_line(&self) -> CommandLine {
        CommandLine::new(format!(
            "{} {REBUILD_AND_EXIT_OPTION} {}",
            self.executable,
            self.arguments()
        ))
    }
}
