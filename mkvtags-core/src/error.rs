//! Error types for mkvtags core operations.

use thiserror::Error;

/// Core error type for mkvtags operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Codec class name is not part of the codec namespace.
    #[error("unknown codec class '{class}'")]
    UnknownCodec {
        /// Class name that failed to resolve.
        class: String,
    },

    /// Value has no numeric interpretation.
    #[error("value '{value}' is not numeric")]
    NotNumeric {
        /// Rendered value.
        value: String,
    },
}

impl Error {
    /// Creates an unknown codec error.
    pub fn unknown_codec(class: impl Into<String>) -> Self {
        Self::UnknownCodec {
            class: class.into(),
        }
    }
}

/// Result type alias for mkvtags core operations.
pub type Result<T> = std::result::Result<T, Error>;
