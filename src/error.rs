//! Error types and handling for vietaddr.

/// Result type alias for vietaddr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for vietaddr operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Gazetteer data errors (missing files, empty files, corrupt entries)
    #[error("Gazetteer error: {message}")]
    GazetteerError {
        /// Error message
        message: String,
    },

    /// Trie construction errors
    #[error("Build error: {message}")]
    BuildError {
        /// Error message
        message: String,
    },

    /// I/O errors
    #[error("I/O error: {source}")]
    IoError {
        /// Source error
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a new gazetteer error
    pub fn gazetteer_error(message: impl Into<String>) -> Self {
        Self::GazetteerError {
            message: message.into(),
        }
    }

    /// Create a new build error
    pub fn build_error(message: impl Into<String>) -> Self {
        Self::BuildError {
            message: message.into(),
        }
    }
}
