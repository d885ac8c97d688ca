//! # mkvtags Schema
//!
//! Matroska/WebM element schema registry.
//!
//! This crate provides:
//! - Element descriptors with containment, default and value semantics
//! - A dual-keyed registry (by id and by name) with unknown-id fallback
//! - Profile filtering by document type and specification version
//! - The static Matroska catalogue and its override table
//! - A lazily built registry handle shared across threads
//! - Registry validation

pub mod builder;
pub mod catalogue;
pub mod descriptor;
pub mod error;
pub mod overrides;
pub mod profile;
pub mod registry;
pub mod shared;
pub mod validation;

pub use builder::{RegistryBuilder, build_registry};
pub use catalogue::{INTERNAL_ID, INTERNAL_TAGS, MATROSKA_TAGS, RowDefault, RowParent, TagRow};
pub use descriptor::{
    DefaultValue, NumericBounds, Parent, TagAttributes, TagDescriptor, TagIndex, UNKNOWN_NAME,
    ValueTable,
};
pub use error::{ProfileError, RegistryError, Result, SchemaError};
pub use overrides::{MATROSKA_OVERRIDES, StaticValues, TagOverride};
pub use profile::{DocType, MAX_VERSION, MIN_VERSION, Profile};
pub use registry::{TagKey, TagRegistry};
pub use shared::{SharedRegistry, global};
pub use validation::validate_registry;
