//! Session store-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the session token slot.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Token file path was not set
    #[error("Session file path not set")]
    FilePathNotSet,

    /// Failed to read the token slot
    #[error("Failed to read session token from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the token slot
    #[error("Failed to write session token to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to remove the token slot
    #[error("Failed to clear session token at {path}: {source}")]
    ClearFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the session directory
    #[error("Failed to create session directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let error = SessionError::FilePathNotSet;
        assert!(error.to_string().contains("file path not set"));

        let path = PathBuf::from("/test/session");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = SessionError::WriteFailed {
            path,
            source: io_error,
        };
        assert!(error.to_string().contains("/test/session"));
        assert!(error.to_string().contains("denied"));
    }
}
