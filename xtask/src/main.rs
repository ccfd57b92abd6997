mod cmd;
mod fs;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/build).
    Preflight,
    /// Build the release launcher and stage a bin/conf/lib install layout.
    Dist {
        /// Output directory (defaults to target/dist/kc)
        #[arg(long, value_name = "DIR")]
        out: Option<std::path::PathBuf>,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::Dist { out } => {
            cmd::dist::run(out)?;
        }
    }
    Ok(())
}
