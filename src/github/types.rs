use serde::Deserialize;

/// A repository within the target organization.
///
/// Only the name is carried; the owning organization is fixed for the whole
/// run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoRef {
    pub name: String,
}

/// The slice of `GET /repos/{owner}/{repo}` the propagator consumes.
#[derive(Debug, Deserialize)]
pub struct RepoMetadata {
    pub default_branch: String,
}

/// A git reference, as returned by `GET /repos/{owner}/{repo}/git/ref/{ref}`.
#[derive(Debug, Deserialize)]
pub(crate) struct GitRef {
    pub(crate) object: GitRefObject,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GitRefObject {
    pub(crate) sha: String,
}

/// The slice of the create-PR response worth reporting.
#[derive(Debug, Deserialize)]
pub struct CreatedPullRequest {
    pub number: u64,
    pub html_url: String,
}
