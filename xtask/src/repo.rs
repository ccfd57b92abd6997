use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;

/// Package whose manifest marks the workspace root.
const LAUNCHER_PACKAGE: &str = "kc-launcher";

/// Locate the `kc-launcher` workspace from the current directory, falling
/// back to the directory this xtask was built from.
pub fn repo_root() -> anyhow::Result<PathBuf> {
    let cwd = env::current_dir()?;
    find_launcher_root(&cwd)
        .or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).parent().and_then(find_launcher_root))
        .ok_or_else(|| {
            anyhow!(
                "failed to find the {LAUNCHER_PACKAGE} workspace above {}",
                cwd.display()
            )
        })
}

/// Nearest ancestor of `start` whose Cargo.toml declares the launcher package.
pub fn find_launcher_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| declares_launcher_package(&dir.join("Cargo.toml")))
        .map(Path::to_path_buf)
}

fn declares_launcher_package(manifest: &Path) -> bool {
    let Ok(content) = fs::read_to_string(manifest) else {
        return false;
    };
    content.lines().any(|line| {
        let Some((key, value)) = line.split_once('=') else {
            return false;
        };
        key.trim() == "name" && value.trim().trim_matches('"') == LAUNCHER_PACKAGE
    })
}
