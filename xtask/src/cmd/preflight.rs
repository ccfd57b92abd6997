use crate::repo;
use anyhow::Result;

use super::cargo_step;

pub fn run() -> Result<()> {
    let root = repo::repo_root()?;
    cargo_step(&root, "cargo fetch", &["fetch"])?;
    cargo_step(&root, "cargo check --all", &["check", "--all"])?;
    cargo_step(&root, "cargo test --all", &["test", "--all"])?;
    cargo_step(&root, "cargo fmt -- --check", &["fmt", "--", "--check"])?;
    cargo_step(
        &root,
        "cargo clippy --all-targets -- -D warnings",
        &["clippy", "--all-targets", "--", "-D", "warnings"],
    )?;
    cargo_step(&root, "cargo build --release", &["build", "--release"])?;
    Ok(())
}
