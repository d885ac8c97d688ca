//! Error types for the element registry.

use crate::descriptor::TagIndex;
use thiserror::Error;

/// Error type for document profile configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Document type is neither Matroska nor WebM.
    #[error("unknown document type '{doc_type}'")]
    UnknownDocType {
        /// Rejected document type.
        doc_type: String,
    },

    /// Specification version outside the supported range.
    #[error("unsupported specification version {version} (supported: {min}..={max})")]
    UnsupportedVersion {
        /// Rejected version.
        version: u8,
        /// Lowest supported version.
        min: u8,
        /// Highest supported version.
        max: u8,
    },
}

/// Error type for registry construction and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A row names a parent that has not been registered yet.
    #[error("tag '{name}' references parent '{parent}' which is not registered")]
    UnknownParent {
        /// Name of the tag being constructed.
        name: String,
        /// Missing parent name.
        parent: String,
    },

    /// A descriptor's parent index does not belong to this registry.
    #[error("tag '{name}' references parent index {index} outside the registry")]
    DanglingParent {
        /// Name of the tag being inserted.
        name: String,
        /// Out-of-range arena index.
        index: TagIndex,
    },

    /// A row's codec class is not part of the codec namespace.
    #[error("tag '{name}' uses unknown codec class '{class}'")]
    UnknownCodec {
        /// Name of the tag being constructed.
        name: String,
        /// Unresolved class name.
        class: String,
    },

    /// No descriptor is registered under the key.
    #[error("no tag registered under {key}")]
    NotFound {
        /// Rendered lookup key.
        key: String,
    },

    /// Invalid document profile.
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

impl RegistryError {
    /// Creates an unknown parent error.
    pub fn unknown_parent(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::UnknownParent {
            name: name.into(),
            parent: parent.into(),
        }
    }

    /// Creates an unknown codec error.
    pub fn unknown_codec(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self::UnknownCodec {
            name: name.into(),
            class: class.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(key: impl ToString) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }
}

/// Error type for schema validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// An enum or bitfield codec has no value table, or the wrong kind.
    #[error("tag '{name}' is bound to {codec} but {problem}")]
    ValueTable {
        /// Tag name.
        name: String,
        /// Codec class name.
        codec: String,
        /// Description of the mismatch.
        problem: String,
    },

    /// A sibling default points at a descriptor under another parent.
    #[error("tag '{name}' inherits its default from '{sibling}', which is not a sibling")]
    ForeignDefault {
        /// Tag name.
        name: String,
        /// Referenced descriptor name.
        sibling: String,
    },

    /// A literal default lies outside the descriptor's bounds.
    #[error("default {value} of tag '{name}' is outside its bounds")]
    DefaultOutOfBounds {
        /// Tag name.
        name: String,
        /// Rendered default.
        value: String,
    },

    /// A child list references a descriptor that names another parent.
    #[error("tag '{child}' is listed under '{parent}' but declares another parent")]
    BrokenLink {
        /// Container name.
        parent: String,
        /// Child name.
        child: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
