//! Per-call environment construction.

use std::collections::HashMap;

/// Returns a snapshot of the process-wide environment.
#[must_use]
pub fn environment_snapshot() -> HashMap<String, String> {
    std::env::vars().collect()
}

/// Shallow-merges `overrides` over `base`; the override wins per key.
///
/// Computed fresh for every invocation. Neither input is mutated and
/// the process-wide environment is never written.
#[must_use]
pub fn merge_environment(
    base: &HashMap<String, String>,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
