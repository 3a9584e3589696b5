use thiserror::Error;

/// Unified error type for git-devtags operations
#[derive(Error, Debug)]
pub enum DevTagsError {
    /// A git subprocess exited non-zero. Carries the tool's own diagnostic
    /// output and exit status so callers can forward both.
    #[error("git {command} failed:\n{stderr}")]
    GitCommand {
        command: String,
        stderr: String,
        status: i32,
    },

    #[error("No version tags found in repository!")]
    NoVersionTags,

    #[error("Latest official release tag (X.Y.Z) not found!")]
    NoOfficialTags,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-devtags
pub type Result<T> = std::result::Result<T, DevTagsError>;

impl DevTagsError {
    /// Create a git subprocess error from the joined argument list,
    /// captured stderr and exit status.
    pub fn git_command(command: impl Into<String>, stderr: impl Into<String>, status: i32) -> Self {
        DevTagsError::GitCommand {
            command: command.into(),
            stderr: stderr.into(),
            status,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DevTagsError::Config(msg.into())
    }

    /// The process exit status this error should terminate with.
    ///
    /// Subprocess failures propagate the tool's own status; everything
    /// else exits 1.
    pub fn exit_status(&self) -> i32 {
        match self {
            DevTagsError::GitCommand { status, .. } => *status,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_command_display_includes_diagnostic() {
        let err = DevTagsError::git_command("tag --list", "fatal: not a git repository", 128);
        let msg = err.to_string();
        assert!(msg.starts_with("git tag --list failed:"));
        assert!(msg.contains("fatal: not a git repository"));
    }

    #[test]
    fn test_git_command_propagates_status() {
        let err = DevTagsError::git_command("push --delete origin 1.0.0-dev.1", "rejected", 2);
        assert_eq!(err.exit_status(), 2);
    }

    #[test]
    fn test_non_subprocess_errors_exit_one() {
        assert_eq!(DevTagsError::NoVersionTags.exit_status(), 1);
        assert_eq!(DevTagsError::NoOfficialTags.exit_status(), 1);
        assert_eq!(DevTagsError::config("bad keep_releases").exit_status(), 1);
    }

    #[test]
    fn test_missing_tag_messages_are_descriptive() {
        assert_eq!(
            DevTagsError::NoVersionTags.to_string(),
            "No version tags found in repository!"
        );
        assert_eq!(
            DevTagsError::NoOfficialTags.to_string(),
            "Latest official release tag (X.Y.Z) not found!"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DevTagsError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert_eq!(err.exit_status(), 1);
    }
}
