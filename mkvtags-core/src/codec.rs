//! Codec bindings.
//!
//! Every element descriptor names the payload interpreter that decodes and
//! encodes its value. The registry never runs a codec itself; it only records
//! a [`CodecKind`] and resolves it from the class names found in static
//! element tables through a [`CodecNamespace`].

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Payload interpreter bound to an element descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// Opaque element that is skipped rather than decoded.
    Unsupported,
    /// Inert element reserved for internal bookkeeping.
    Placeholder,
    /// Padding element.
    Void,
    /// Generic container of child elements.
    Master,
    /// Container whose children are only read on demand.
    MasterDefer,
    /// Generic fixed-size atomic value.
    Atomic,
    /// Raw binary payload.
    Raw,
    /// Unsigned integer.
    Unsigned,
    /// Signed integer.
    Signed,
    /// Boolean stored as an unsigned integer.
    Boolean,
    /// Unsigned integer mapped through an enumeration table.
    Enum,
    /// Unsigned integer whose bits are labelled by a bitfield table.
    BitField,
    /// IEEE floating point (4 or 8 bytes).
    Float,
    /// Printable ASCII string.
    String,
    /// UTF-8 string.
    Unicode,
    /// Signed nanoseconds since 2001-01-01T00:00:00 UTC.
    Date,
    /// Binary payload holding another element id.
    Id,
    /// EBML header container.
    Ebml,
    /// Segment container.
    Segment,
    /// Seek entry container.
    Seek,
    /// Segment information container.
    Info,
    /// Track entry container.
    TrackEntry,
    /// Video settings container.
    Video,
    /// Audio settings container.
    Audio,
    /// Attached file container.
    AttachedFile,
    /// Tag container.
    Tag,
    /// Tag targets container.
    Targets,
    /// Simple tag container.
    SimpleTag,
    /// Chapter edition container.
    EditionEntry,
    /// Chapter atom container.
    ChapterAtom,
}

impl CodecKind {
    /// All codec bindings, in namespace order.
    pub const ALL: [CodecKind; 30] = [
        Self::Unsupported,
        Self::Placeholder,
        Self::Void,
        Self::Master,
        Self::MasterDefer,
        Self::Atomic,
        Self::Raw,
        Self::Unsigned,
        Self::Signed,
        Self::Boolean,
        Self::Enum,
        Self::BitField,
        Self::Float,
        Self::String,
        Self::Unicode,
        Self::Date,
        Self::Id,
        Self::Ebml,
        Self::Segment,
        Self::Seek,
        Self::Info,
        Self::TrackEntry,
        Self::Video,
        Self::Audio,
        Self::AttachedFile,
        Self::Tag,
        Self::Targets,
        Self::SimpleTag,
        Self::EditionEntry,
        Self::ChapterAtom,
    ];

    /// Returns the class name used for this codec in static element tables.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Unsupported => "ElementUnsupported",
            Self::Placeholder => "ElementPlaceholder",
            Self::Void => "ElementVoid",
            Self::Master => "ElementMaster",
            Self::MasterDefer => "ElementMasterDefer",
            Self::Atomic => "ElementAtomic",
            Self::Raw => "ElementRaw",
            Self::Unsigned => "ElementUnsigned",
            Self::Signed => "ElementSigned",
            Self::Boolean => "ElementBoolean",
            Self::Enum => "ElementEnum",
            Self::BitField => "ElementBitField",
            Self::Float => "ElementFloat",
            Self::String => "ElementString",
            Self::Unicode => "ElementUnicode",
            Self::Date => "ElementDate",
            Self::Id => "ElementID",
            Self::Ebml => "ElementEBML",
            Self::Segment => "ElementSegment",
            Self::Seek => "ElementSeek",
            Self::Info => "ElementInfo",
            Self::TrackEntry => "ElementTrackEntry",
            Self::Video => "ElementVideo",
            Self::Audio => "ElementAudio",
            Self::AttachedFile => "ElementAttachedFile",
            Self::Tag => "ElementTag",
            Self::Targets => "ElementTargets",
            Self::SimpleTag => "ElementSimpleTag",
            Self::EditionEntry => "ElementEditionEntry",
            Self::ChapterAtom => "ElementChapterAtom",
        }
    }

    /// Parses a codec binding from its class name.
    #[must_use]
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class_name() == name)
    }

    /// Returns true if elements bound to this codec contain child elements.
    #[must_use]
    pub const fn is_master(&self) -> bool {
        matches!(
            self,
            Self::Master
                | Self::MasterDefer
                | Self::Ebml
                | Self::Segment
                | Self::Seek
                | Self::Info
                | Self::TrackEntry
                | Self::Video
                | Self::Audio
                | Self::AttachedFile
                | Self::Tag
                | Self::Targets
                | Self::SimpleTag
                | Self::EditionEntry
                | Self::ChapterAtom
        )
    }

    /// Returns true if the payload decodes to a number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Unsigned
                | Self::Signed
                | Self::Boolean
                | Self::Enum
                | Self::BitField
                | Self::Float
                | Self::Date
        )
    }

    /// Returns true if the payload is a floating point number.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float)
    }

    /// Returns true if the payload is never interpreted.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Self::Unsupported | Self::Placeholder | Self::Void)
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for CodecKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_class_name(s).ok_or_else(|| Error::unknown_codec(s))
    }
}

/// Namespace mapping codec class names to codec bindings.
///
/// Static element tables refer to codecs by class name; the registry
/// resolves each name exactly once per loaded row.
pub trait CodecNamespace {
    /// Resolves a class name, returning `None` if it is not part of the
    /// namespace.
    fn resolve(&self, class_name: &str) -> Option<CodecKind>;
}

/// The built-in namespace of `Element*` codec classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCodecs;

impl CodecNamespace for StandardCodecs {
    fn resolve(&self, class_name: &str) -> Option<CodecKind> {
        CodecKind::from_class_name(class_name)
    }
}

impl<T: CodecNamespace + ?Sized> CodecNamespace for &T {
    fn resolve(&self, class_name: &str) -> Option<CodecKind> {
        (**self).resolve(class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_round_trip() {
        for kind in CodecKind::ALL {
            assert_eq!(CodecKind::from_class_name(kind.class_name()), Some(kind));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "ElementBogus".parse::<CodecKind>().unwrap_err();
        assert_eq!(err, Error::unknown_codec("ElementBogus"));
        assert_eq!(err.to_string(), "unknown codec class 'ElementBogus'");
    }

    #[test]
    fn test_codec_classification() {
        assert!(CodecKind::Segment.is_master());
        assert!(CodecKind::MasterDefer.is_master());
        assert!(!CodecKind::Raw.is_master());

        assert!(CodecKind::Enum.is_numeric());
        assert!(CodecKind::Float.is_float());
        assert!(!CodecKind::Unsigned.is_float());
        assert!(!CodecKind::Unicode.is_numeric());

        assert!(CodecKind::Placeholder.is_opaque());
        assert!(!CodecKind::Id.is_opaque());
    }

    #[test]
    fn test_standard_namespace() {
        let codecs = StandardCodecs;
        assert_eq!(codecs.resolve("ElementID"), Some(CodecKind::Id));
        assert_eq!(codecs.resolve("ElementEBML"), Some(CodecKind::Ebml));
        assert_eq!(codecs.resolve("Unsigned"), None);

        let by_ref: &dyn CodecNamespace = &codecs;
        assert_eq!(by_ref.resolve("ElementVoid"), Some(CodecKind::Void));
    }

    #[test]
    fn test_display() {
        assert_eq!(CodecKind::BitField.to_string(), "ElementBitField");
    }
}
