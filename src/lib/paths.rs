//! Install-root resolution and the directories derived from it.

use std::{
    env,
    path::{Path, PathBuf},
};

use super::errors::LaunchError;

/// Configuration directory below the install root.
pub const CONF_DIR: &str = "conf";
/// Library directory below the install root.
pub const LIB_DIR: &str = "lib";
/// Bundle the managed server is started from.
pub const LIBRARY_POINTER_FILE: &str = "quarkus-run.jar";

/// Directory that contains `bin/`, `conf/` and `lib/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRoot(PathBuf);

impl InstallRoot {
    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn conf_dir(&self) -> PathBuf {
        self.0.join(CONF_DIR)
    }

    pub fn library_pointer(&self) -> PathBuf {
        self.0.join(LIB_DIR).join(LIBRARY_POINTER_FILE)
    }
}

/// Resolve the install root from the running executable.
pub fn resolve_install_root() -> Result<InstallRoot, LaunchError> {
    let exe = env::current_exe()
        .map_err(|err| LaunchError::install_root(PathBuf::from("<current_exe>"), err.to_string()))?;
    // Follow symlinks so a linked `kc` still points at the real install.
    let exe = exe.canonicalize().unwrap_or(exe);
    install_root_from(&exe)
}

/// Executable -> bin directory -> install root.
pub fn install_root_from(executable: &Path) -> Result<InstallRoot, LaunchError> {
    let executable = absolutize(executable);
    executable
        .parent()
        .and_then(Path::parent)
        .filter(|root| !root.as_os_str().is_empty())
        .map(|root| InstallRoot(root.to_path_buf()))
        .ok_or_else(|| {
            LaunchError::install_root(executable.clone(), "executable has no grandparent directory")
        })
}

/// Returns the path made absolute against the current directory.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
