//! # mkvtags
//!
//! Element schema registry for Matroska and WebM streams.
//!
//! A demuxer consults the registry to learn, for every EBML element id it
//! meets, the element's name, how its payload is interpreted, where it may
//! appear and which default applies when it is absent.
//!
//! ## Quick Start
//!
//! ```
//! use mkvtags::prelude::*;
//!
//! let registry = build_registry(Profile::webm(4)?)?;
//! let segment = registry.lookup_name("Segment")?;
//! assert_eq!(segment.codec, CodecKind::Segment);
//!
//! // Unknown ids resolve to a placeholder instead of failing.
//! assert_eq!(registry.lookup_id(0x1234).name, "Unknown");
//! # Ok::<(), RegistryError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Codec bindings, element headers and literal values
//! - [`schema`] - Descriptors, registry, profiles, catalogue and validation

pub mod prelude;

/// Codec bindings, element headers and literal values.
pub mod core {
    pub use mkvtags_core::*;
}

/// Element descriptors and the registry.
pub mod schema {
    pub use mkvtags_schema::*;
}

// Re-export commonly used items at the crate root
pub use mkvtags_core::{CodecKind, Element, ElementHeader, Value};
pub use mkvtags_schema::{
    Profile, RegistryBuilder, SharedRegistry, TagDescriptor, TagRegistry, build_registry,
};

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use tracing_subscriber::EnvFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_instantiate_from_lookup() {
        init_tracing();
        let registry = build_registry(Profile::default()).unwrap();
        let header = ElementHeader::new(0x18538067, 0, 12, None);
        let element = registry.lookup_id(header.id).instantiate(header);

        assert_eq!(element.name(), "Segment");
        assert_eq!(element.codec(), CodecKind::Segment);
        assert_eq!(element.reserved_header_size(), 12);
        tracing::debug!(?element, "instantiated");
    }

    #[test]
    fn test_unknown_element_instantiates_unsupported() {
        init_tracing();
        let registry = build_registry(Profile::default()).unwrap();
        let header = ElementHeader::new(0x7FFF, 40, 3, Some(2));
        let element = registry.lookup_id(header.id).instantiate(header);

        assert_eq!(element.name(), "Unknown");
        assert_eq!(element.codec(), CodecKind::Unsupported);
    }

    #[test]
    fn test_shared_handle_through_prelude() {
        init_tracing();
        let shared = SharedRegistry::new(Profile::webm(2).unwrap());
        let registry = shared.registry().unwrap();
        assert!(validate_registry(&registry).is_ok());
        assert!(!registry.contains("SignatureSlot"));
    }
}
