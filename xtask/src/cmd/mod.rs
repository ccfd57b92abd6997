pub mod dist;
pub mod preflight;

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Result;

/// Run `cargo <args>` in `root`, failing on a non-zero status.
pub fn cargo_step(root: &Path, label: &str, args: &[&str]) -> Result<()> {
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
