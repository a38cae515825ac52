use anyhow::{Context, Result};
use octocrab::Octocrab;

/// Build the Octocrab instance used for the whole run.
///
/// `api_url` overrides the API base URI (GitHub Enterprise installs, or a
/// local mock server in tests); when absent the client targets
/// api.github.com.
pub fn build(token: String, api_url: Option<&str>) -> Result<Octocrab> {
    let builder = match api_url {
        Some(url) => Octocrab::builder()
            .personal_token(token)
            .base_uri(url)
            .with_context(|| format!("setting API base URI {url}"))?,
        None => Octocrab::builder().personal_token(token),
    };

    builder.build().context("building octocrab instance")
}
