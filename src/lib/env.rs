//! Environment lookup capability used by configuration resolution.
use std::collections::{BTreeMap, HashMap};

/// Read-only view of environment variables.
pub trait EnvLookup {
    /// Returns the value of `name`, or `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset.
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
