//! Command line assembly and the build/run launch sequence.
mod invocation;
mod startup;

pub use invocation::{assemble_invocation, Invocation, ENTRY_POINT, REBUILD_AND_EXIT_OPTION};
pub use startup::{execute, exit_code_from, launch, Phase, RuntimeExit};
