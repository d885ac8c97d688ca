//! Prelude module for convenient imports.
//!
//! ```
//! use mkvtags::prelude::*;
//! ```

// Core types
pub use mkvtags_core::{
    CodecKind, CodecNamespace, Element, ElementHeader, Error as CoreError, Number,
    StandardCodecs, Value,
};

// Registry types
pub use mkvtags_schema::{
    DefaultValue, DocType, Parent, Profile, ProfileError, RegistryBuilder, RegistryError,
    SchemaError, SharedRegistry, TagDescriptor, TagKey, TagOverride, TagRegistry, TagRow,
    build_registry, validate_registry,
};
