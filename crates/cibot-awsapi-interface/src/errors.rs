//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// File content is not text.
    #[error(
        "File '{}' on '{}' in repository '{}' is not valid UTF-8",
        file_path,
        commit_specifier,
        repository_name
    )]
    InvalidFileEncoding {
        repository_name: String,
        commit_specifier: String,
        file_path: String,
        source: std::string::FromUtf8Error,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
