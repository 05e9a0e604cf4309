//! Error types for the nichepost CLI.
//!
//! Only two things can go wrong: the invocation itself is unusable, or the
//! post cannot be written. Affiliate parsing never produces an error.

use crate::exit_codes;
use std::path::Path;
use thiserror::Error;

/// Main error type for nichepost operations.
#[derive(Error, Debug)]
pub enum PostError {
    /// User provided invalid input or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// A filesystem operation on the output failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl PostError {
    /// Build an `Io` error describing the path that failed.
    pub fn io(action: &str, path: &Path, source: std::io::Error) -> Self {
        PostError::Io {
            context: format!("failed to {} '{}'", action, path.display()),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PostError::UserError(_) => exit_codes::USER_ERROR,
            PostError::Io { .. } => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for nichepost operations.
pub type Result<T> = std::result::Result<T, PostError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PostError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = PostError::io(
            "create directory",
            Path::new("_posts"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), exit_codes::WRITE_FAILURE);
    }

    #[test]
    fn io_error_message_names_the_path() {
        let err = PostError::io(
            "write post",
            Path::new("_posts/2024-01-15-x.md"),
            io::Error::other("disk full"),
        );
        assert_eq!(
            err.to_string(),
            "failed to write post '_posts/2024-01-15-x.md': disk full"
        );
    }
}
