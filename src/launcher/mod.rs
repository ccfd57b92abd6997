//! Configuration resolution and the build/run launch sequence.

pub mod config;
pub mod runtime;
