use std::{
    collections::{BTreeMap, VecDeque},
    fs,
};

use kc_launcher::lib::{
    errors::LaunchError,
    paths::{install_root_from, InstallRoot},
    process::{CommandLine, ProcessRunner},
};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_kc");

/// Variables the launcher reads; cleared before spawning the real binary.
pub const LAUNCHER_ENV: [&str; 8] = [
    "DEBUG",
    "DEBUG_PORT",
    "DEBUG_SUSPEND",
    "CONFIG_ARGS",
    "JAVA",
    "JAVA_HOME",
    "JAVA_OPTS",
    "JAVA_OPTS_APPEND",
];

pub fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Temporary `bin/`, `conf/`, `lib/` layout.
pub fn install_layout() -> (TempDir, InstallRoot) {
    let temp = tempfile::tempdir().expect("can create temporary directory");
    for dir in ["bin", "conf", "lib"] {
        fs::create_dir_all(temp.path().join(dir)).expect("can create layout directory");
    }
    let root = install_root_from(&temp.path().join("bin").join("kc")).expect("root resolves");
    (temp, root)
}

/// Records every command line and answers with scripted exit codes.
#[derive(Default)]
pub struct RecordingRunner {
    codes: VecDeque<i32>,
    pub started: Vec<CommandLine>,
}

impl RecordingRunner {
    pub fn with_codes(codes: impl IntoIterator<Item = i32>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            started: Vec::new(),
        }
    }
}

impl ProcessRunner for RecordingRunner {
    async fn run(&mut self, command: &CommandLine) -> Result<i32, LaunchError> {
        self.started.push(command.clone());
        Ok(self.codes.pop_front().expect("unexpected extra process start"))
    }
}

/// Writes an executable shell script that stands in for `java`.
#[cfg(unix)]
pub fn fake_java(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-java");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("can write fake java");
    let mut permissions = fs::metadata(&path).expect("fake java metadata").permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).expect("can mark fake java executable");
    path
}
