use http::StatusCode;
use thiserror::Error;

/// A remote API failure, tagged by what the caller can act on.
///
/// The existence probes treat `NotFound` as a negative answer; every other
/// failure is a real error. Classification relies on the response status
/// code, never on the error message text.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The requested object does not exist (HTTP 404).
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Any other failure reported by the API client.
    #[error(transparent)]
    Other(octocrab::Error),
}

impl From<octocrab::Error> for RemoteError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { ref source, .. }
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                Self::NotFound {
                    message: source.message.clone(),
                }
            }
            other => Self::Other(other),
        }
    }
}

impl RemoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
