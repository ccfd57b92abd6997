use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::cargo_step;
use crate::{fs as xfs, repo};

/// Directories the launcher expects below the install root.
pub const LAYOUT_DIRS: [&str; 3] = ["bin", "conf", "lib"];

pub fn run(out: Option<PathBuf>) -> Result<()> {
    let root = repo::repo_root()?;
    cargo_step(
        &root,
        "cargo build --release --bin kc",
        &["build", "--release", "--bin", "kc"],
    )?;

    let binary = root.join("target").join("release").join(binary_name());
    let out = out.unwrap_or_else(|| root.join("target").join("dist").join("kc"));
    stage(&binary, &out)?;

    for file in xfs::staged_files(&out)? {
        println!("{}", file.display());
    }
    eprintln!(
        "Staged install layout at {} (place quarkus-run.jar under lib/)",
        out.display()
    );
    Ok(())
}

/// Create `bin/`, `conf/`, `lib/` under `out` and copy the launcher into `bin/`.
pub fn stage(binary: &Path, out: &Path) -> Result<PathBuf> {
    for dir in LAYOUT_DIRS {
        let path = out.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
    }

    let target = out.join("bin").join(binary_name());
    fs::copy(binary, &target).with_context(|| {
        format!(
            "failed to copy {} to {}",
            binary.display(),
            target.display()
        )
    })?;
    Ok(target)
}

fn binary_name() -> String {
    format!("kc{}", std::env::consts::EXE_SUFFIX)
}
