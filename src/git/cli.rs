use std::path::PathBuf;
use std::process::Command;

use crate::error::{DevTagsError, Result};
use crate::git::TagStore;

/// [TagStore] implementation that shells out to the `git` binary.
///
/// Each call runs one `git` subprocess to completion and captures its
/// output. A non-zero exit becomes a
/// [DevTagsError::GitCommand] carrying the tool's stderr and exit status,
/// which callers are expected to forward verbatim.
pub struct GitCli {
    /// Repository to operate on; `None` uses the current directory.
    repo_dir: Option<PathBuf>,
}

impl GitCli {
    /// Create a git CLI handle operating on the current directory.
    pub fn new() -> Self {
        GitCli { repo_dir: None }
    }

    /// Create a git CLI handle operating on the given repository directory
    /// (passed to git as `-C <dir>`).
    pub fn with_repo_dir(dir: impl Into<PathBuf>) -> Self {
        GitCli {
            repo_dir: Some(dir.into()),
        }
    }

    /// Run `git <args>` and return its trimmed stdout.
    fn run(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("git");
        if let Some(dir) = &self.repo_dir {
            cmd.arg("-C").arg(dir);
        }
        cmd.args(args);

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(DevTagsError::git_command(
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).into_owned(),
                output.status.code().unwrap_or(1),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a tag-listing command and split its output into tag names,
    /// skipping blank lines.
    fn list(&self, args: &[&str]) -> Result<Vec<String>> {
        let stdout = self.run(args)?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl TagStore for GitCli {
    fn list_tags(&self) -> Result<Vec<String>> {
        self.list(&["tag", "--list"])
    }

    fn list_tags_version_sorted(&self) -> Result<Vec<String>> {
        self.list(&["tag", "--sort=v:refname"])
    }

    fn delete_local_tag(&self, name: &str) -> Result<()> {
        self.run(&["tag", "-d", name])?;
        Ok(())
    }

    fn delete_remote_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.run(&["push", "--delete", remote, name])?;
        Ok(())
    }
}
