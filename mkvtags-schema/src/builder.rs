//! Registry construction from static tables.

use crate::catalogue::{INTERNAL_TAGS, MATROSKA_TAGS, TagRow};
use crate::error::Result;
use crate::overrides::{MATROSKA_OVERRIDES, TagOverride};
use crate::profile::Profile;
use crate::registry::TagRegistry;
use mkvtags_core::{CodecNamespace, StandardCodecs};

/// Builder for configuring and creating a registry.
pub struct RegistryBuilder<'a> {
    profile: Profile,
    rows: &'a [TagRow],
    overrides: &'a [TagOverride],
    codecs: &'a dyn CodecNamespace,
}

impl RegistryBuilder<'static> {
    /// Creates a builder for the full Matroska catalogue under the default
    /// profile.
    #[must_use]
    pub fn new() -> Self {
        Self {
            profile: Profile::default(),
            rows: MATROSKA_TAGS,
            overrides: MATROSKA_OVERRIDES,
            codecs: &StandardCodecs,
        }
    }
}

impl<'a> RegistryBuilder<'a> {
    /// Sets the document profile.
    #[must_use]
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Sets the descriptor rows, parents before children.
    #[must_use]
    pub fn rows(mut self, rows: &'a [TagRow]) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the override table.
    #[must_use]
    pub fn overrides(mut self, overrides: &'a [TagOverride]) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sets the namespace codec class names are resolved in.
    #[must_use]
    pub fn codecs(mut self, codecs: &'a dyn CodecNamespace) -> Self {
        self.codecs = codecs;
        self
    }

    /// Builds the registry.
    ///
    /// Rows inactive under the profile are skipped. The internal-use
    /// descriptors are always added, then the overrides are applied.
    ///
    /// # Errors
    /// Returns `RegistryError` if a row names an unregistered parent or an
    /// unknown codec class.
    pub fn build(self) -> Result<TagRegistry> {
        let mut registry = TagRegistry::new(self.profile);
        let mut skipped = 0usize;

        for row in self.rows {
            if !self.profile.admits(row.webm, row.min_version, row.max_version) {
                tracing::trace!(tag = row.name, profile = %self.profile, "skipping inactive row");
                skipped += 1;
                continue;
            }
            registry.define(row, self.codecs)?;
        }
        for row in &INTERNAL_TAGS {
            registry.define(row, self.codecs)?;
        }
        let applied = registry.apply_overrides(self.overrides);

        tracing::debug!(
            profile = %self.profile,
            tags = registry.descriptor_count(),
            skipped,
            overrides = applied,
            "built tag registry"
        );
        Ok(registry)
    }
}

impl Default for RegistryBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the Matroska registry for a profile.
///
/// # Errors
/// Returns `RegistryError` if the built-in tables are inconsistent.
pub fn build_registry(profile: Profile) -> Result<TagRegistry> {
    RegistryBuilder::new().profile(profile).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{INTERNAL_ID, RowParent};
    use crate::descriptor::{DefaultValue, Parent, TagDescriptor};
    use crate::error::RegistryError;
    use mkvtags_core::{CodecKind, Value};
    use std::cell::Cell;

    struct CountingCodecs {
        resolved: Cell<usize>,
    }

    impl CodecNamespace for CountingCodecs {
        fn resolve(&self, class_name: &str) -> Option<CodecKind> {
            self.resolved.set(self.resolved.get() + 1);
            StandardCodecs.resolve(class_name)
        }
    }

    fn matroska(version: u8) -> TagRegistry {
        build_registry(Profile::matroska(version).unwrap()).unwrap()
    }

    fn webm(version: u8) -> TagRegistry {
        build_registry(Profile::webm(version).unwrap()).unwrap()
    }

    #[test]
    fn test_default_profile_is_matroska_v4() {
        let registry = RegistryBuilder::new().build().unwrap();
        assert_eq!(registry.profile(), Profile::MATROSKA_V4);
        assert!(registry.contains("Segment"));
        assert!(registry.contains(0x18538067_u64));
    }

    #[test]
    fn test_every_descriptor_reachable_by_both_keys() {
        let registry = matroska(4);
        for tag in registry.descriptors() {
            assert!(std::ptr::eq(registry.lookup_name(&tag.name).unwrap(), tag));
            if tag.id != INTERNAL_ID {
                assert!(std::ptr::eq(&*registry.lookup_id(tag.id), tag));
            }
        }
    }

    #[test]
    fn test_default_never_required() {
        let registry = matroska(4);
        for tag in registry.descriptors() {
            if tag.default_value().is_some() {
                assert!(!tag.required(), "{}", tag.name);
            }
        }
        let scale = registry.lookup_name("TimecodeScale").unwrap();
        assert!(scale.mandatory_flag());
        assert!(!scale.required());
        assert_eq!(
            registry.resolve_default(scale),
            Some(&Value::Unsigned(1_000_000))
        );
    }

    #[test]
    fn test_child_in_parent_list() {
        let registry = matroska(4);
        for tag in registry.descriptors() {
            if let Parent::Tag { .. } = tag.parent() {
                let parent = registry.parent_of(tag).unwrap();
                assert_eq!(
                    registry.children(parent).filter(|c| *c == tag).count(),
                    1,
                    "{}",
                    tag.name
                );
            }
        }
    }

    #[test]
    fn test_global_children_everywhere() {
        let registry = matroska(4);
        let void = registry.lookup_name("Void").unwrap();
        assert!(void.is_child_of(None));
        assert!(
            registry
                .descriptors()
                .all(|container| void.is_child_of(Some(container)))
        );
    }

    #[test]
    fn test_segment_children() {
        let registry = matroska(4);
        let segment = registry.lookup_name("Segment").unwrap();
        let info = registry.lookup_name("Info").unwrap();
        let cluster = registry.lookup_name("Cluster").unwrap();

        assert!(info.is_child_of(Some(segment)));
        assert!(!info.is_child_of(Some(cluster)));
        assert!(!info.is_child_of(None));
        assert!(segment.is_child_of(None));
        assert!(registry.children(segment).any(|c| c.name == "Cluster"));
    }

    #[test]
    fn test_recursive_chapter_atom() {
        let registry = matroska(4);
        let atom = registry.lookup_name("ChapterAtom").unwrap();
        let edition = registry.lookup_name("EditionEntry").unwrap();
        assert!(atom.is_child_of(Some(atom)));
        assert!(atom.is_child_of(Some(edition)));
    }

    #[test]
    fn test_containment_across_registries() {
        let full = matroska(4);
        let web = webm(4);
        let info = full.lookup_name("Info").unwrap();
        let web_segment = web.lookup_name("Segment").unwrap();
        let detached = TagDescriptor::new(0x18538067, "Segment", CodecKind::Segment, Parent::TopLevel);

        assert!(info.is_child_of(Some(web_segment)));
        assert!(info.is_child_of(Some(&detached)));

        let void = full.lookup_name("Void").unwrap();
        for tag in web.descriptors() {
            let expected = tag.parent() == Parent::Global || tag.recursive && tag.id == void.id;
            assert_eq!(tag.is_child_of(Some(void)), expected, "{}", tag.name);
        }
    }

    #[test]
    fn test_webm_excludes_non_webm_rows() {
        let registry = webm(4);
        for row in MATROSKA_TAGS.iter().filter(|row| !row.webm) {
            assert!(!registry.contains(row.name), "{}", row.name);
            assert_eq!(registry.lookup_id(row.id).name, "Unknown", "{}", row.name);
        }
        assert!(!registry.contains("CRC-32"));
        assert!(registry.contains("Segment"));
        assert!(registry.descriptors().all(|tag| tag.webm));
    }

    #[test]
    fn test_matroska_version_filter() {
        let v2 = matroska(2);
        for tag in v2.descriptors() {
            assert!(tag.min_version <= 2 && 2 <= tag.max_version, "{}", tag.name);
        }
        assert!(!v2.contains("TrackOperation"));
        assert!(v2.contains("SimpleBlock"));

        let v1 = matroska(1);
        assert!(!v1.contains("SimpleBlock"));
        assert!(!v1.contains("BlockVirtual"));
    }

    #[test]
    fn test_internal_tags_injected() {
        for registry in [matroska(1), webm(3)] {
            assert!(registry.contains("LibInternal"));
            assert!(registry.contains("LibInternal2"));
            let by_id = registry.lookup_id(INTERNAL_ID);
            assert_eq!(by_id.name, "LibInternal2");
            assert_eq!(by_id.codec, CodecKind::Placeholder);
            assert_eq!(by_id.parent(), Parent::Global);
        }
    }

    #[test]
    fn test_overrides_win() {
        let registry = matroska(4);
        let segment = registry.lookup_name("Segment").unwrap();
        assert_eq!(segment.codec, CodecKind::Segment);
        assert_eq!(segment.header_size_min, 8);

        let track_type = registry.lookup_name("TrackType").unwrap();
        assert_eq!(track_type.codec, CodecKind::Enum);
        assert_eq!(track_type.describe(2).as_deref(), Some("audio"));

        assert_eq!(registry.lookup_name("Title").unwrap().data_size_min, 100);
        assert_eq!(
            registry.lookup_name("Cues").unwrap().codec,
            CodecKind::MasterDefer
        );
    }

    #[test]
    fn test_every_override_applied() {
        for registry in [matroska(4), matroska(1), webm(4)] {
            for entry in MATROSKA_OVERRIDES {
                let Some(tag) = registry.get(entry.name) else {
                    continue;
                };
                if let Some(codec) = entry.codec {
                    assert_eq!(tag.codec, codec, "{}", entry.name);
                }
                if let Some(size) = entry.header_size_min {
                    assert_eq!(tag.header_size_min, size, "{}", entry.name);
                }
                if let Some(size) = entry.data_size_min {
                    assert_eq!(tag.data_size_min, size, "{}", entry.name);
                }
                if let Some(values) = entry.values {
                    assert_eq!(tag.values, Some(values.to_table()), "{}", entry.name);
                }
                if let Some(sibling) = entry.default_from {
                    let sibling = registry.lookup_name(sibling).unwrap();
                    assert_eq!(
                        tag.default_value(),
                        Some(&DefaultValue::Sibling(sibling.index().unwrap())),
                        "{}",
                        entry.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_display_width_defaults_to_pixel_width() {
        let registry = matroska(4);
        let width = registry.lookup_name("DisplayWidth").unwrap();
        let pixel = registry.lookup_name("PixelWidth").unwrap();
        assert_eq!(
            width.default_value(),
            Some(&DefaultValue::Sibling(pixel.index().unwrap()))
        );
        assert!(!width.required());
        assert_eq!(width.parent(), pixel.parent());
    }

    #[test]
    fn test_custom_codecs_consulted_per_row() {
        let codecs = CountingCodecs {
            resolved: Cell::new(0),
        };
        let rows = [
            TagRow::new(0x1A45DFA3, "EBML", "ElementMaster", RowParent::TopLevel, true, true, true, 1, 4),
            TagRow::new(0x4286, "EBMLVersion", "ElementUnsigned", RowParent::Named("EBML"), true, false, true, 1, 4),
        ];
        let registry = RegistryBuilder::new()
            .rows(&rows)
            .overrides(&[])
            .codecs(&codecs)
            .build()
            .unwrap();

        assert_eq!(codecs.resolved.get(), rows.len() + INTERNAL_TAGS.len());
        assert_eq!(registry.descriptor_count(), 4);
    }

    #[test]
    fn test_child_before_parent_fails() {
        let rows = [
            TagRow::new(0x4286, "EBMLVersion", "ElementUnsigned", RowParent::Named("EBML"), true, false, true, 1, 4),
            TagRow::new(0x1A45DFA3, "EBML", "ElementMaster", RowParent::TopLevel, true, true, true, 1, 4),
        ];
        let err = RegistryBuilder::new().rows(&rows).build().unwrap_err();
        assert_eq!(err, RegistryError::unknown_parent("EBMLVersion", "EBML"));
    }

    #[test]
    fn test_unknown_codec_class_fails() {
        let rows = [TagRow::new(0xEC, "Void", "ElementMystery", RowParent::Global, false, true, true, 1, 4)];
        let err = RegistryBuilder::new().rows(&rows).build().unwrap_err();
        assert!(matches!(err, RegistryError::UnknownCodec { .. }));
    }
}
