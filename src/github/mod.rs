//! GitHub REST access: authentication, client construction, and the small
//! set of read/write calls the propagator issues.

pub mod auth;
pub mod client;
pub mod error;
pub mod mutations;
pub mod repos;
pub mod types;

pub use error::RemoteError;
pub use types::RepoRef;
