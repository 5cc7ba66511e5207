//! Environment variable candidate scanning.
//!
//! Variables whose names contain the key delimiter are candidates for deep
//! path binding (`A__B__0__C=value` with delimiter `__`). The environment is
//! an injected capability so tests can run against a fixed fake.

use std::collections::HashMap;

/// A source of environment variables.
///
/// [`ProcessEnv`] is the production implementation; tests substitute a fixed
/// in-memory source.
pub trait EnvSource {
    /// Snapshot the environment as name/value pairs.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars().collect()
    }
}

/// Return the environment entries whose name contains `delimiter`.
///
/// Names and raw values are kept exactly as stored; duplicate names keep the
/// last-enumerated value. An empty delimiter matches nothing, since no deep
/// path can be spelled with it.
pub fn scan_candidates(env: &dyn EnvSource, delimiter: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();
    if delimiter.is_empty() {
        return result;
    }
    for (name, value) in env.vars() {
        if name.contains(delimiter) {
            result.insert(name, value);
        }
    }
    result
}
