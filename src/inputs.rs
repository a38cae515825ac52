use std::path::Path;

use anyhow::{Context, Result};

use crate::policy::PropagationPolicy;

/// Load the seed content and the propagation policy from local disk.
///
/// A missing or unreadable file is a deliberate no-op, not an error: the run
/// logs the problem and ends early with `Ok(None)`, having issued no remote
/// calls. A policy file that exists but is not valid JSON fails the run.
pub fn load_inputs(
    seed_path: &Path,
    policy_path: &Path,
) -> Result<Option<(String, PropagationPolicy)>> {
    let Some(seed) = read_optional(seed_path) else {
        return Ok(None);
    };
    let Some(raw_policy) = read_optional(policy_path) else {
        return Ok(None);
    };

    let policy: PropagationPolicy = serde_json::from_str(&raw_policy)
        .with_context(|| format!("parsing policy JSON from {}", policy_path.display()))?;
    Ok(Some((seed, policy)))
}

fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(err) => {
            tracing::warn!("cannot read {}: {err}", path.display());
            None
        }
    }
}
