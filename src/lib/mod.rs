//! Shared library modules providing environment access, error types, paths, process spawning, and telemetry.

pub mod env;
pub mod errors;
pub mod paths;
pub mod process;
pub mod telemetry;
