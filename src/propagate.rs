//! The propagator: decide, per eligible repository, whether the seed file
//! needs a pull request, and drive the branch/commit/PR sequence when it
//! does.

use anyhow::Result;
use octocrab::Octocrab;

use crate::github::{mutations, repos};
use crate::policy::{self, PropagationPolicy};
use crate::report::{RepoOutcome, RunReport};

/// Path of the propagated file, both in the source working directory and in
/// every target repository.
pub const SEED_PATH: &str = "CODEOWNERS";

/// Commit message for the file commit on the propagation branch.
const COMMIT_MESSAGE: &str = "Created CODEOWNERS";

/// Deterministic name of the branch staging the file in `repo`.
pub fn propagation_branch(repo: &str) -> String {
    format!("codeowners-feature-{repo}")
}

fn pr_title(repo: &str) -> String {
    format!("Add CODEOWNERS file to {repo}")
}

/// Run the full propagation pass over the organization.
///
/// Repositories are processed one at a time. A failing repository records a
/// `Failed` outcome and the loop continues with the next one.
pub async fn run(
    octocrab: &Octocrab,
    org: &str,
    source_repo: &str,
    seed: &str,
    policy: &PropagationPolicy,
) -> Result<RunReport> {
    let all_repos = repos::list_org_repos(octocrab, org).await?;
    let targets = policy::eligible_targets(all_repos, source_repo, policy);
    tracing::info!("{} eligible repositories in {org}", targets.len());

    let mut report = RunReport::default();
    for repo in targets {
        let outcome = match propagate_one(octocrab, org, &repo.name, seed).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!("{org}/{}: {err:#}", repo.name);
                RepoOutcome::Failed {
                    message: format!("{err:#}"),
                }
            }
        };
        tracing::info!("{org}/{}: {}", repo.name, outcome.as_str());
        report.record(repo.name, outcome);
    }
    Ok(report)
}

/// The per-repository decision procedure.
///
/// Serial, single-attempt, stops at the first satisfied precondition: the
/// file already existing on the default branch, or an open pull request for
/// the propagation branch. A branch left behind by a crashed run makes the
/// ref creation fail; that surfaces as this repository's failure, with no
/// automated repair.
async fn propagate_one(
    octocrab: &Octocrab,
    org: &str,
    repo: &str,
    seed: &str,
) -> Result<RepoOutcome> {
    if repos::file_exists(octocrab, org, repo, SEED_PATH).await? {
        return Ok(RepoOutcome::FilePresent);
    }

    let branch = propagation_branch(repo);
    if mutations::open_pr_exists(octocrab, org, repo, &branch).await? {
        tracing::info!("pull request already exists for repository {repo}");
        return Ok(RepoOutcome::PrAlreadyOpen);
    }

    let base = repos::default_branch(octocrab, org, repo).await?;
    let sha = repos::branch_tip_sha(octocrab, org, repo, &base).await?;
    mutations::create_branch(octocrab, org, repo, &branch, &sha).await?;
    mutations::commit_file(octocrab, org, repo, &branch, SEED_PATH, COMMIT_MESSAGE, seed).await?;
    let pr =
        mutations::open_pull_request(octocrab, org, repo, &pr_title(repo), &branch, &base).await?;
    tracing::debug!("opened {}", pr.html_url);

    Ok(RepoOutcome::PrOpened { number: pr.number })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_name_is_deterministic() {
        assert_eq!(propagation_branch("api"), "codeowners-feature-api");
        assert_eq!(propagation_branch("api"), propagation_branch("api"));
    }

    #[test]
    fn pr_title_references_the_repository() {
        assert_eq!(pr_title("api"), "Add CODEOWNERS file to api");
    }
}
