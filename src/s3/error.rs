use std::path::Path;
use thiserror::Error;

/// Errors from a single file's upload. Never fatal to the batch: the
/// drive loop logs them and moves on.
#[derive(Error, Debug)]
pub enum UploadError {
    /// File disappeared or was never readable locally
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Permission denied accessing local file
    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    /// Any other local I/O failure
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Service rejected our credentials for this bucket
    #[error("access denied for bucket '{bucket}': {message}")]
    S3AccessDenied { bucket: String, message: String },

    /// Anything else the service or transport reported
    #[error("{message}")]
    Api { message: String },
}

impl UploadError {
    /// Classify an AWS SDK error, pulling access-denied out of the noise
    pub fn from_aws_error<E: std::fmt::Display>(bucket: &str, error: E) -> Self {
        let message = error.to_string();
        if message.to_lowercase().contains("access denied")
            || message.to_lowercase().contains("forbidden")
        {
            Self::S3AccessDenied {
                bucket: bucket.to_string(),
                message,
            }
        } else {
            Self::Api { message }
        }
    }

    /// Classify a local I/O error with the path it occurred on
    pub fn from_io_error(error: std::io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io {
                path,
                source: error,
            },
        }
    }
}
