use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};
use octocrab::Octocrab;

use super::types::CreatedPullRequest;

// ---------------------------------------------------------------------------
// Write-side API calls
// ---------------------------------------------------------------------------

/// Whether an open pull request exists with head `{org}:{branch}`.
pub async fn open_pr_exists(
    octocrab: &Octocrab,
    org: &str,
    repo: &str,
    branch: &str,
) -> Result<bool> {
    let route = format!("/repos/{org}/{repo}/pulls?head={org}:{branch}&state=open");
    let pulls: Vec<serde_json::Value> = octocrab
        .get(route, None::<&()>)
        .await
        .context("listing pull requests by head")?;
    Ok(!pulls.is_empty())
}

/// Create the branch ref `refs/heads/{branch}` pointing at `sha`.
///
/// Fails if the ref already exists, e.g. left over from a prior partial run.
pub async fn create_branch(
    octocrab: &Octocrab,
    org: &str,
    repo: &str,
    branch: &str,
    sha: &str,
) -> Result<()> {
    let route = format!("/repos/{org}/{repo}/git/refs");
    let payload = serde_json::json!({
        "ref": format!("refs/heads/{branch}"),
        "sha": sha,
    });
    let _: serde_json::Value = octocrab
        .post(route, Some(&payload))
        .await
        .context("creating branch ref")?;
    Ok(())
}

/// Commit `content` at `path` on `branch`. The contents API takes the
/// payload base64-encoded.
pub async fn commit_file(
    octocrab: &Octocrab,
    org: &str,
    repo: &str,
    branch: &str,
    path: &str,
    message: &str,
    content: &str,
) -> Result<()> {
    let route = format!("/repos/{org}/{repo}/contents/{path}");
    let payload = serde_json::json!({
        "message": message,
        "content": general_purpose::STANDARD.encode(content),
        "branch": branch,
    });
    let _: serde_json::Value = octocrab
        .put(route, Some(&payload))
        .await
        .context("committing file contents")?;
    Ok(())
}

/// Open a pull request from `head` into `base`.
pub async fn open_pull_request(
    octocrab: &Octocrab,
    org: &str,
    repo: &str,
    title: &str,
    head: &str,
    base: &str,
) -> Result<CreatedPullRequest> {
    let route = format!("/repos/{org}/{repo}/pulls");
    let payload = serde_json::json!({
        "title": title,
        "head": head,
        "base": base,
    });
    octocrab
        .post(route, Some(&payload))
        .await
        .context("opening pull request")
}
