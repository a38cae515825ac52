use std::process::Command;

use anyhow::{Context, Result, bail};

/// Resolve the GitHub auth token for the run.
///
/// Priority:
/// 1. the `--github-token` flag
/// 2. `gh auth token` (gh CLI)
/// 3. `GH_TOKEN` environment variable
/// 4. `GITHUB_TOKEN` environment variable
pub fn resolve_token(flag: Option<&str>) -> Result<String> {
    if let Some(token) = flag
        && !token.is_empty()
    {
        return Ok(token.to_owned());
    }

    if let Ok(token) = gh_cli_token() {
        return Ok(token);
    }

    if let Ok(token) = std::env::var("GH_TOKEN")
        && !token.is_empty()
    {
        return Ok(token);
    }
    if let Ok(token) = std::env::var("GITHUB_TOKEN")
        && !token.is_empty()
    {
        return Ok(token);
    }

    bail!(
        "no GitHub token available. \
         Pass --github-token, run `gh auth login`, or set GH_TOKEN / GITHUB_TOKEN."
    )
}

fn gh_cli_token() -> Result<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .context("running `gh auth token`")?;

    if !output.status.success() {
        bail!("`gh auth token` exited with status {}", output.status);
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    if token.is_empty() {
        bail!("`gh auth token` returned nothing");
    }

    Ok(token)
}
