use anyhow::{Context, Result};
use octocrab::Octocrab;

use super::error::RemoteError;
use super::types::{GitRef, RepoMetadata, RepoRef};

/// Page size for the org repository listing.
const PER_PAGE: usize = 100;

// ---------------------------------------------------------------------------
// Read-side API calls
// ---------------------------------------------------------------------------

/// List every repository of the organization, following pagination.
///
/// Order is whatever the API returns; callers must not assume it is sorted.
pub async fn list_org_repos(octocrab: &Octocrab, org: &str) -> Result<Vec<RepoRef>> {
    let mut repos = Vec::new();
    for page in 1.. {
        let route = format!("/orgs/{org}/repos?type=all&per_page={PER_PAGE}&page={page}");
        let batch: Vec<RepoRef> = octocrab
            .get(route, None::<&()>)
            .await
            .with_context(|| format!("listing repositories of {org} (page {page})"))?;
        let last_page = batch.len() < PER_PAGE;
        repos.extend(batch);
        if last_page {
            break;
        }
    }
    Ok(repos)
}

/// Name of the repository's default branch, fetched fresh each run.
pub async fn default_branch(octocrab: &Octocrab, org: &str, repo: &str) -> Result<String> {
    let route = format!("/repos/{org}/{repo}");
    let meta: RepoMetadata = octocrab
        .get(route, None::<&()>)
        .await
        .with_context(|| format!("fetching metadata of {org}/{repo}"))?;
    Ok(meta.default_branch)
}

/// SHA of the tip commit of `branch`.
pub async fn branch_tip_sha(
    octocrab: &Octocrab,
    org: &str,
    repo: &str,
    branch: &str,
) -> Result<String> {
    let route = format!("/repos/{org}/{repo}/git/ref/heads/{branch}");
    let git_ref: GitRef = octocrab
        .get(route, None::<&()>)
        .await
        .with_context(|| format!("resolving heads/{branch} in {org}/{repo}"))?;
    Ok(git_ref.object.sha)
}

/// Probe for a file at `path` on the repository's default branch.
///
/// A 404 from the contents API means the file is absent; any other failure
/// is an error for this repository.
pub async fn file_exists(octocrab: &Octocrab, org: &str, repo: &str, path: &str) -> Result<bool> {
    let route = format!("/repos/{org}/{repo}/contents/{path}");
    let result: octocrab::Result<serde_json::Value> = octocrab.get(route, None::<&()>).await;
    match result.map_err(RemoteError::from) {
        Ok(_) => Ok(true),
        Err(err) if err.is_not_found() => Ok(false),
        Err(err) => Err(err).with_context(|| format!("probing for {path} in {org}/{repo}")),
    }
}
