//! Registry validation utilities.
//!
//! Checks the consistency of a built registry: value tables match their
//! codecs, defaults are usable and the containment graph links both ways.

use crate::descriptor::{DefaultValue, Parent, TagDescriptor};
use crate::error::SchemaError;
use crate::registry::TagRegistry;
use mkvtags_core::{CodecKind, Number};

/// Validates every registered descriptor.
///
/// # Arguments
/// * `registry` - The registry to validate
///
/// # Errors
/// Returns `SchemaError` describing the first inconsistency found.
pub fn validate_registry(registry: &TagRegistry) -> Result<(), SchemaError> {
    for tag in registry.descriptors() {
        validate_value_table(tag)?;
        validate_default(registry, tag)?;
        validate_children(registry, tag)?;
    }
    Ok(())
}

/// Enum and bitfield codecs need a table of the same kind.
fn validate_value_table(tag: &TagDescriptor) -> Result<(), SchemaError> {
    let problem = match (tag.codec, &tag.values) {
        (CodecKind::Enum, Some(table)) if table.is_enum() => None,
        (CodecKind::BitField, Some(table)) if table.is_bitfield() => None,
        (CodecKind::Enum | CodecKind::BitField, None) => Some("has no value table"),
        (CodecKind::Enum | CodecKind::BitField, Some(_)) => Some("carries the wrong kind of value table"),
        (_, Some(_)) => Some("carries a value table it cannot use"),
        (_, None) => None,
    };

    match problem {
        Some(problem) => Err(SchemaError::ValueTable {
            name: tag.name.clone(),
            codec: tag.codec.class_name().to_string(),
            problem: problem.to_string(),
        }),
        None => Ok(()),
    }
}

fn validate_default(registry: &TagRegistry, tag: &TagDescriptor) -> Result<(), SchemaError> {
    match tag.default_value() {
        None => Ok(()),
        Some(DefaultValue::Literal(value)) => match Number::try_from(value) {
            Ok(number) if !tag.admits(number) => Err(SchemaError::DefaultOutOfBounds {
                name: tag.name.clone(),
                value: value.to_string(),
            }),
            _ => Ok(()),
        },
        Some(DefaultValue::Sibling(index)) => {
            let Some(sibling) = registry.tag(*index) else {
                return Err(SchemaError::Validation {
                    message: format!(
                        "tag '{}' inherits its default from unknown slot {}",
                        tag.name, index
                    ),
                });
            };
            if sibling.parent() != tag.parent() || sibling == tag {
                return Err(SchemaError::ForeignDefault {
                    name: tag.name.clone(),
                    sibling: sibling.name.clone(),
                });
            }
            Ok(())
        }
    }
}

fn validate_children(registry: &TagRegistry, tag: &TagDescriptor) -> Result<(), SchemaError> {
    let Some(index) = tag.index() else {
        return Ok(());
    };
    for child in registry.children(tag) {
        if child.parent() != (Parent::Tag { index, id: tag.id }) {
            return Err(SchemaError::BrokenLink {
                parent: tag.name.clone(),
                child: child.name.clone(),
            });
        }
    }
    Ok(())
}
