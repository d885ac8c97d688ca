//! Per-name adjustments applied after the catalogue is loaded.
//!
//! The static catalogue only knows generic codec classes. Overrides re-bind
//! elements to their dedicated codecs, set size floors, attach value tables
//! and let elements inherit their default from a sibling.

use crate::descriptor::ValueTable;
use mkvtags_core::CodecKind;

/// Static value table carried by an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticValues {
    /// Value to label pairs.
    Enum(&'static [(u64, &'static str)]),
    /// Labels in bit order.
    BitField(&'static [&'static str]),
}

impl StaticValues {
    /// Converts into an owned value table.
    #[must_use]
    pub fn to_table(&self) -> ValueTable {
        match *self {
            Self::Enum(pairs) => ValueTable::enumeration(pairs.iter().copied()),
            Self::BitField(labels) => ValueTable::bitfield(labels.iter().copied()),
        }
    }
}

/// Attributes to set on one registered descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOverride {
    /// Name of the descriptor to adjust.
    pub name: &'static str,
    /// Replacement codec binding.
    pub codec: Option<CodecKind>,
    /// Minimal header length.
    pub header_size_min: Option<u8>,
    /// Minimal payload length.
    pub data_size_min: Option<u64>,
    /// Value labels.
    pub values: Option<StaticValues>,
    /// Sibling to inherit the default value from.
    pub default_from: Option<&'static str>,
}

impl TagOverride {
    /// Creates an override that changes nothing.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            codec: None,
            header_size_min: None,
            data_size_min: None,
            values: None,
            default_from: None,
        }
    }

    /// Re-binds the codec.
    #[must_use]
    pub const fn codec(mut self, codec: CodecKind) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Sets the header size floor.
    #[must_use]
    pub const fn header_size_min(mut self, size: u8) -> Self {
        self.header_size_min = Some(size);
        self
    }

    /// Sets the payload size floor.
    #[must_use]
    pub const fn data_size_min(mut self, size: u64) -> Self {
        self.data_size_min = Some(size);
        self
    }

    /// Binds to the enum codec with the given labels.
    #[must_use]
    pub const fn enumeration(mut self, pairs: &'static [(u64, &'static str)]) -> Self {
        self.codec = Some(CodecKind::Enum);
        self.values = Some(StaticValues::Enum(pairs));
        self
    }

    /// Binds to the bitfield codec with the given labels.
    #[must_use]
    pub const fn bitfield(mut self, labels: &'static [&'static str]) -> Self {
        self.codec = Some(CodecKind::BitField);
        self.values = Some(StaticValues::BitField(labels));
        self
    }

    /// Inherits the default value from a sibling.
    #[must_use]
    pub const fn default_from(mut self, sibling: &'static str) -> Self {
        self.default_from = Some(sibling);
        self
    }
}

const TRANSLATE_CODECS: &[(u64, &str)] = &[(0, "Matroska Script"), (1, "DVD-menu")];

const TRACK_TYPES: &[(u64, &str)] = &[
    (0x1, "video"),
    (0x2, "audio"),
    (0x3, "complex"),
    (0x10, "logo"),
    (0x11, "subtitle"),
    (0x12, "buttons"),
    (0x20, "control"),
];

const STEREO_MODES: &[(u64, &str)] = &[
    (0, "mono"),
    (1, "side-by-side (left)"),
    (2, "top-bottom (right)"),
    (3, "top-bottom (left)"),
    (4, "checkerboard (right)"),
    (5, "checkerboard (left)"),
    (6, "row interleaved (right)"),
    (7, "row interleaved (left)"),
    (8, "col interleaved (right)"),
    (9, "col interleaved (left)"),
    (10, "anaglyph (cyan/red)"),
    (11, "side-by-side (right)"),
    (12, "anaglyph (green/magenta)"),
    (13, "both (left)"),
    (14, "both (right)"),
];

const DISPLAY_UNITS: &[(u64, &str)] = &[
    (0, "pixels"),
    (1, "centimeters"),
    (2, "inches"),
    (3, "Display Aspect Ratio"),
];

const ASPECT_RATIO_TYPES: &[(u64, &str)] =
    &[(0, "free resizing"), (1, "keep aspect ratio"), (2, "fixed")];

const PLANE_TYPES: &[(u64, &str)] = &[(0, "left eye"), (1, "right eye"), (2, "background")];

const ENCODING_SCOPES: &[&str] = &[
    "all-frame-contents",
    "track-private-data",
    "the-next-ContentEncoding",
];

const ENCODING_TYPES: &[(u64, &str)] = &[(0, "compression"), (1, "encryption")];

const COMPRESSION_ALGOS: &[(u64, &str)] = &[
    (0, "zlib"),
    (1, "bzlib"),
    (2, "lzo1x"),
    (3, "Header Stripping"),
];

const ENCRYPTION_ALGOS: &[(u64, &str)] = &[
    (0, "signed only"),
    (1, "DES"),
    (2, "3DES"),
    (3, "Twofish"),
    (4, "Blowfish"),
    (5, "AES"),
];

const SIGNATURE_ALGOS: &[(u64, &str)] = &[(0, "signed only"), (1, "RSA")];

const SIGNATURE_HASH_ALGOS: &[(u64, &str)] = &[(0, "signed only"), (1, "SHA1-160"), (2, "MD5")];

/// Adjustments applied to every Matroska registry.
pub static MATROSKA_OVERRIDES: &[TagOverride] = &[
    TagOverride::named("EBML").codec(CodecKind::Ebml),
    TagOverride::named("Void").codec(CodecKind::Void),
    TagOverride::named("SignedElement").codec(CodecKind::Id),
    TagOverride::named("Segment")
        .codec(CodecKind::Segment)
        .header_size_min(8),
    TagOverride::named("Seek").codec(CodecKind::Seek),
    TagOverride::named("SeekID").codec(CodecKind::Id),
    TagOverride::named("SeekPosition").data_size_min(8),
    TagOverride::named("Info").codec(CodecKind::Info),
    TagOverride::named("Title").data_size_min(100),
    TagOverride::named("EditionEntry").codec(CodecKind::EditionEntry),
    TagOverride::named("ChapterAtom").codec(CodecKind::ChapterAtom),
    TagOverride::named("ChapterTranslateCodec").enumeration(TRANSLATE_CODECS),
    TagOverride::named("SimpleBlock").codec(CodecKind::Raw),
    TagOverride::named("Block").codec(CodecKind::Unsupported),
    TagOverride::named("BlockVirtual").codec(CodecKind::Unsupported),
    TagOverride::named("BlockAdditional").codec(CodecKind::Unsupported),
    TagOverride::named("CodecState").codec(CodecKind::Unsupported),
    TagOverride::named("EncryptedBlock").codec(CodecKind::Unsupported),
    TagOverride::named("TrackEntry").codec(CodecKind::TrackEntry),
    TagOverride::named("TrackType").enumeration(TRACK_TYPES),
    TagOverride::named("TrackTranslateCodec").enumeration(TRANSLATE_CODECS),
    TagOverride::named("Video").codec(CodecKind::Video),
    TagOverride::named("StereoMode").enumeration(STEREO_MODES),
    TagOverride::named("DisplayWidth").default_from("PixelWidth"),
    TagOverride::named("DisplayHeight").default_from("PixelHeight"),
    TagOverride::named("DisplayUnit").enumeration(DISPLAY_UNITS),
    TagOverride::named("AspectRatioType").enumeration(ASPECT_RATIO_TYPES),
    TagOverride::named("Colour").codec(CodecKind::Raw),
    TagOverride::named("Audio").codec(CodecKind::Audio),
    TagOverride::named("OutputSamplingFrequency").default_from("SamplingFrequency"),
    TagOverride::named("TrackPlaneType").enumeration(PLANE_TYPES),
    TagOverride::named("ContentEncodingScope").bitfield(ENCODING_SCOPES),
    TagOverride::named("ContentEncodingType").enumeration(ENCODING_TYPES),
    TagOverride::named("ContentCompAlgo").enumeration(COMPRESSION_ALGOS),
    TagOverride::named("ContentEncAlgo").enumeration(ENCRYPTION_ALGOS),
    TagOverride::named("ContentSigAlgo").enumeration(SIGNATURE_ALGOS),
    TagOverride::named("ContentSigHashAlgo").enumeration(SIGNATURE_HASH_ALGOS),
    TagOverride::named("Cues").codec(CodecKind::MasterDefer),
    TagOverride::named("Attachments").header_size_min(4),
    TagOverride::named("AttachedFile")
        .codec(CodecKind::AttachedFile)
        .header_size_min(4),
    TagOverride::named("FileUID").codec(CodecKind::Raw),
    TagOverride::named("Tag").codec(CodecKind::Tag),
    TagOverride::named("Targets").codec(CodecKind::Targets),
    TagOverride::named("SimpleTag").codec(CodecKind::SimpleTag),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::MATROSKA_TAGS;
    use std::collections::HashSet;

    #[test]
    fn test_override_names_exist_in_catalogue() {
        let names: HashSet<_> = MATROSKA_TAGS.iter().map(|row| row.name).collect();
        for entry in MATROSKA_OVERRIDES {
            assert!(names.contains(entry.name), "{}", entry.name);
            if let Some(sibling) = entry.default_from {
                assert!(names.contains(sibling), "{sibling}");
            }
        }
    }

    #[test]
    fn test_enumeration_sets_codec() {
        let entry = TagOverride::named("TrackType").enumeration(TRACK_TYPES);
        assert_eq!(entry.codec, Some(CodecKind::Enum));
        let table = entry.values.map(|values| values.to_table());
        assert_eq!(
            table.and_then(|table| table.describe(0x11)).as_deref(),
            Some("subtitle")
        );
    }

    #[test]
    fn test_bitfield_sets_codec() {
        let entry = TagOverride::named("ContentEncodingScope").bitfield(ENCODING_SCOPES);
        assert_eq!(entry.codec, Some(CodecKind::BitField));
        assert!(matches!(entry.values, Some(StaticValues::BitField(labels)) if labels.len() == 3));
    }

    #[test]
    fn test_segment_override() {
        let segment = MATROSKA_OVERRIDES
            .iter()
            .find(|entry| entry.name == "Segment")
            .unwrap();
        assert_eq!(segment.codec, Some(CodecKind::Segment));
        assert_eq!(segment.header_size_min, Some(8));
        assert_eq!(segment.data_size_min, None);
    }
}
