//! Git tag access abstraction layer
//!
//! The decision logic in [crate::prune] and [crate::resolve] never talks to
//! git directly; it goes through the [TagStore] trait so it can be exercised
//! against an in-memory fake instead of a real repository.
//!
//! Implementations:
//!
//! - [cli::GitCli]: shells out to the `git` binary
//! - [mock::MockTagStore]: in-memory implementation for testing

pub mod cli;
pub mod mock;

pub use cli::GitCli;
pub use mock::MockTagStore;

use crate::error::Result;

/// Capability interface over the repository's tag state.
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result]; implementations map subprocess failures to
/// [crate::error::DevTagsError::GitCommand] so callers can forward the
/// tool's diagnostic output and exit status.
pub trait TagStore: Send + Sync {
    /// List all tags in the repository, in whatever order the tool reports
    /// them (`git tag --list`).
    fn list_tags(&self) -> Result<Vec<String>>;

    /// List all tags in the tool's own version order
    /// (`git tag --sort=v:refname`).
    ///
    /// The order is best-effort semver-like; in particular the tool ranks
    /// `X.Y.Z-dev.N` after `X.Y.Z`. Callers that need the true latest
    /// release must correct for that themselves.
    fn list_tags_version_sorted(&self) -> Result<Vec<String>>;

    /// Delete a tag from the local repository (`git tag -d <name>`).
    fn delete_local_tag(&self, name: &str) -> Result<()>;

    /// Delete a tag on a remote (`git push --delete <remote> <name>`).
    fn delete_remote_tag(&self, remote: &str, name: &str) -> Result<()>;
}
