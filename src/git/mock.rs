use std::sync::Mutex;

use crate::error::{DevTagsError, Result};
use crate::git::TagStore;

/// In-memory [TagStore] for testing without a real repository.
///
/// Holds a fixed tag list, records every deletion in call order, and can be
/// told to fail on a specific tag name to exercise fail-fast paths.
pub struct MockTagStore {
    tags: Vec<String>,
    deleted_local: Mutex<Vec<String>>,
    deleted_remote: Mutex<Vec<(String, String)>>,
    fail_on: Option<String>,
}

impl MockTagStore {
    /// Create a mock store over the given tag list. The list order is used
    /// as-is for both listing methods, so tests control the "tool's sort
    /// order" directly.
    pub fn new(tags: &[&str]) -> Self {
        MockTagStore {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            deleted_local: Mutex::new(Vec::new()),
            deleted_remote: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Make any deletion of `tag` fail with a git error of status 128.
    pub fn fail_on_delete(mut self, tag: impl Into<String>) -> Self {
        self.fail_on = Some(tag.into());
        self
    }

    /// Tags deleted locally so far, in call order.
    pub fn deleted_local(&self) -> Vec<String> {
        self.deleted_local.lock().unwrap().clone()
    }

    /// `(remote, tag)` pairs deleted on a remote so far, in call order.
    pub fn deleted_remote(&self) -> Vec<(String, String)> {
        self.deleted_remote.lock().unwrap().clone()
    }

    fn check_fail(&self, command: &str, name: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(DevTagsError::git_command(
                command.to_string(),
                format!("error: tag '{}' not found.", name),
                128,
            ));
        }
        Ok(())
    }
}

impl TagStore for MockTagStore {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn list_tags_version_sorted(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn delete_local_tag(&self, name: &str) -> Result<()> {
        self.check_fail(&format!("tag -d {}", name), name)?;
        self.deleted_local.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn delete_remote_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.check_fail(&format!("push --delete {} {}", remote, name), name)?;
        self.deleted_remote
            .lock()
            .unwrap()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
