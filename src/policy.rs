use std::collections::BTreeSet;

use serde::Deserialize;

use crate::github::RepoRef;

/// Repository allow/deny lists controlling propagation eligibility.
///
/// Loaded from `.github/codeowners_repos_config.json` in the source
/// repository's working directory:
///
/// ```json
/// { "include": ["api", "web"], "exclude": ["web"] }
/// ```
///
/// Exclusion wins when a name appears in both lists.
#[derive(Debug, Clone, Deserialize)]
pub struct PropagationPolicy {
    pub include: BTreeSet<String>,
    pub exclude: BTreeSet<String>,
}

impl PropagationPolicy {
    /// Whether `name` is a propagation target, given the source repository.
    pub fn is_target(&self, name: &str, source_repo: &str) -> bool {
        name != source_repo && self.include.contains(name) && !self.exclude.contains(name)
    }
}

/// Filter the organization's repositories down to propagation targets.
///
/// Preserves input order (the platform's pagination order).
pub fn eligible_targets(
    repos: Vec<RepoRef>,
    source_repo: &str,
    policy: &PropagationPolicy,
) -> Vec<RepoRef> {
    repos
        .into_iter()
        .filter(|repo| policy.is_target(&repo.name, source_repo))
        .collect()
}
