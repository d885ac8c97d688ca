//! Static Matroska element catalogue.
//!
//! Rows list every parent before its children. Codecs are named by class
//! and resolved through a [`CodecNamespace`](mkvtags_core::CodecNamespace)
//! when the registry is built.

use crate::descriptor::NumericBounds;
use mkvtags_core::{Number, Value};

/// Id shared by the internal bookkeeping elements.
pub const INTERNAL_ID: u64 = 66;

/// Parent reference in a static row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowParent {
    /// Level zero.
    TopLevel,
    /// Any container.
    Global,
    /// The row with this name.
    Named(&'static str),
}

/// Literal default in a static row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowDefault {
    /// Unsigned integer.
    Unsigned(u64),
    /// Signed integer.
    Signed(i64),
    /// Floating point number.
    Float(f64),
    /// String.
    Str(&'static str),
}

impl RowDefault {
    /// Converts the static default into an owned value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match *self {
            Self::Unsigned(v) => Value::Unsigned(v),
            Self::Signed(v) => Value::Signed(v),
            Self::Float(v) => Value::Float(v),
            Self::Str(s) => Value::String(s.to_string()),
        }
    }
}

/// One raw descriptor row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagRow {
    /// Element id.
    pub id: u64,
    /// Element name.
    pub name: &'static str,
    /// Codec class name.
    pub codec: &'static str,
    /// Parent reference.
    pub parent: RowParent,
    /// Must appear in its parent (unless defaulted).
    pub mandatory: bool,
    /// May appear more than once.
    pub multiple: bool,
    /// Part of the WebM subset.
    pub webm: bool,
    /// First specification version.
    pub min_version: u8,
    /// Last specification version.
    pub max_version: u8,
    /// Literal default.
    pub default: Option<RowDefault>,
    /// Numeric bounds.
    pub bounds: NumericBounds,
    /// May contain itself.
    pub recursive: bool,
}

impl TagRow {
    /// Creates a row without optional attributes.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        id: u64,
        name: &'static str,
        codec: &'static str,
        parent: RowParent,
        mandatory: bool,
        multiple: bool,
        webm: bool,
        min_version: u8,
        max_version: u8,
    ) -> Self {
        Self {
            id,
            name,
            codec,
            parent,
            mandatory,
            multiple,
            webm,
            min_version,
            max_version,
            default: None,
            bounds: NumericBounds::UNBOUNDED,
            recursive: false,
        }
    }

    /// Sets the literal default.
    #[must_use]
    pub const fn default(mut self, default: RowDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets an inclusive unsigned lower bound.
    #[must_use]
    pub const fn min(mut self, min: u64) -> Self {
        self.bounds.min = Some(Number::Unsigned(min));
        self
    }

    /// Sets an inclusive unsigned upper bound.
    #[must_use]
    pub const fn max(mut self, max: u64) -> Self {
        self.bounds.max = Some(Number::Unsigned(max));
        self
    }

    /// Sets a strict floating point lower bound.
    #[must_use]
    pub const fn above(mut self, min: f64) -> Self {
        self.bounds.min = Some(Number::Float(min));
        self
    }

    /// Marks the row as recursive.
    #[must_use]
    pub const fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }
}

const TOP: RowParent = RowParent::TopLevel;
const ANY: RowParent = RowParent::Global;

const fn under(name: &'static str) -> RowParent {
    RowParent::Named(name)
}

const fn uint(v: u64) -> RowDefault {
    RowDefault::Unsigned(v)
}

const MASTER: &str = "ElementMaster";
const UINT: &str = "ElementUnsigned";
const INT: &str = "ElementSigned";
const BOOL: &str = "ElementBoolean";
const FLOAT: &str = "ElementFloat";
const STRING: &str = "ElementString";
const UTF8: &str = "ElementUnicode";
const DATE: &str = "ElementDate";
const BINARY: &str = "ElementRaw";

/// Internal-use rows, injected into every registry regardless of profile.
pub const INTERNAL_TAGS: [TagRow; 2] = [
    TagRow::new(INTERNAL_ID, "LibInternal", "ElementPlaceholder", ANY, false, true, true, 1, 4),
    TagRow::new(INTERNAL_ID, "LibInternal2", "ElementPlaceholder", ANY, false, true, true, 1, 4),
];

/// The Matroska element set.
pub static MATROSKA_TAGS: &[TagRow] = &[
    // EBML header
    TagRow::new(0x1A45DFA3, "EBML", MASTER, TOP, true, true, true, 1, 4),
    TagRow::new(0x4286, "EBMLVersion", UINT, under("EBML"), true, false, true, 1, 4).default(uint(1)),
    TagRow::new(0x42F7, "EBMLReadVersion", UINT, under("EBML"), true, false, true, 1, 4).default(uint(1)),
    TagRow::new(0x42F2, "EBMLMaxIDLength", UINT, under("EBML"), true, false, true, 1, 4).default(uint(4)).min(4),
    TagRow::new(0x42F3, "EBMLMaxSizeLength", UINT, under("EBML"), true, false, true, 1, 4).default(uint(8)).min(1).max(8),
    TagRow::new(0x4282, "DocType", STRING, under("EBML"), true, false, true, 1, 4).default(RowDefault::Str("matroska")),
    TagRow::new(0x4287, "DocTypeVersion", UINT, under("EBML"), true, false, true, 1, 4).default(uint(1)).min(1),
    TagRow::new(0x4285, "DocTypeReadVersion", UINT, under("EBML"), true, false, true, 1, 4).default(uint(1)).min(1),
    // Global elements
    TagRow::new(0xBF, "CRC-32", BINARY, ANY, false, false, false, 1, 4),
    TagRow::new(0xEC, "Void", BINARY, ANY, false, true, true, 1, 4),
    TagRow::new(0x1B538667, "SignatureSlot", MASTER, ANY, false, true, false, 1, 4),
    TagRow::new(0x7E8A, "SignatureAlgo", UINT, under("SignatureSlot"), false, false, false, 1, 4),
    TagRow::new(0x7E9A, "SignatureHash", UINT, under("SignatureSlot"), false, false, false, 1, 4),
    TagRow::new(0x7EA5, "SignaturePublicKey", BINARY, under("SignatureSlot"), false, false, false, 1, 4),
    TagRow::new(0x7EB5, "Signature", BINARY, under("SignatureSlot"), false, false, false, 1, 4),
    TagRow::new(0x7E5B, "SignatureElements", MASTER, under("SignatureSlot"), false, false, false, 1, 4),
    TagRow::new(0x7E7B, "SignatureElementList", MASTER, under("SignatureElements"), false, true, false, 1, 4),
    TagRow::new(0x6532, "SignedElement", BINARY, under("SignatureElementList"), false, true, false, 1, 4),
    // Segment
    TagRow::new(0x18538067, "Segment", MASTER, TOP, true, true, true, 1, 4),
    // Meta seek information
    TagRow::new(0x114D9B74, "SeekHead", MASTER, under("Segment"), false, true, true, 1, 4),
    TagRow::new(0x4DBB, "Seek", MASTER, under("SeekHead"), true, true, true, 1, 4),
    TagRow::new(0x53AB, "SeekID", BINARY, under("Seek"), true, false, true, 1, 4),
    TagRow::new(0x53AC, "SeekPosition", UINT, under("Seek"), true, false, true, 1, 4),
    // Segment information
    TagRow::new(0x1549A966, "Info", MASTER, under("Segment"), true, true, true, 1, 4),
    TagRow::new(0x73A4, "SegmentUID", BINARY, under("Info"), false, false, false, 1, 4),
    TagRow::new(0x7384, "SegmentFilename", UTF8, under("Info"), false, false, false, 1, 4),
    TagRow::new(0x3CB923, "PrevUID", BINARY, under("Info"), false, false, false, 1, 4),
    TagRow::new(0x3C83AB, "PrevFilename", UTF8, under("Info"), false, false, false, 1, 4),
    TagRow::new(0x3EB923, "NextUID", BINARY, under("Info"), false, false, false, 1, 4),
    TagRow::new(0x3E83BB, "NextFilename", UTF8, under("Info"), false, false, false, 1, 4),
    TagRow::new(0x4444, "SegmentFamily", BINARY, under("Info"), false, true, false, 1, 4),
    TagRow::new(0x6924, "ChapterTranslate", MASTER, under("Info"), false, true, false, 1, 4),
    TagRow::new(0x69FC, "ChapterTranslateEditionUID", UINT, under("ChapterTranslate"), false, true, false, 1, 4),
    TagRow::new(0x69BF, "ChapterTranslateCodec", UINT, under("ChapterTranslate"), true, false, false, 1, 4),
    TagRow::new(0x69A5, "ChapterTranslateID", BINARY, under("ChapterTranslate"), true, false, false, 1, 4),
    TagRow::new(0x2AD7B1, "TimecodeScale", UINT, under("Info"), true, false, true, 1, 4).default(uint(1_000_000)).min(1),
    TagRow::new(0x4489, "Duration", FLOAT, under("Info"), false, false, true, 1, 4).above(0.0),
    TagRow::new(0x4461, "DateUTC", DATE, under("Info"), false, false, true, 1, 4),
    TagRow::new(0x7BA9, "Title", UTF8, under("Info"), false, false, true, 1, 4),
    TagRow::new(0x4D80, "MuxingApp", UTF8, under("Info"), true, false, true, 1, 4),
    TagRow::new(0x5741, "WritingApp", UTF8, under("Info"), true, false, true, 1, 4),
    // Cluster
    TagRow::new(0x1F43B675, "Cluster", MASTER, under("Segment"), false, true, true, 1, 4),
    TagRow::new(0xE7, "Timecode", UINT, under("Cluster"), true, false, true, 1, 4),
    TagRow::new(0x5854, "SilentTracks", MASTER, under("Cluster"), false, false, false, 1, 4),
    TagRow::new(0x58D7, "SilentTrackNumber", UINT, under("SilentTracks"), false, true, false, 1, 4),
    TagRow::new(0xA7, "Position", UINT, under("Cluster"), false, false, false, 1, 4),
    TagRow::new(0xAB, "PrevSize", UINT, under("Cluster"), false, false, true, 1, 4),
    TagRow::new(0xA3, "SimpleBlock", BINARY, under("Cluster"), false, true, true, 2, 4),
    TagRow::new(0xA0, "BlockGroup", MASTER, under("Cluster"), false, true, true, 1, 4),
    TagRow::new(0xA1, "Block", BINARY, under("BlockGroup"), true, false, true, 1, 4),
    TagRow::new(0xA2, "BlockVirtual", BINARY, under("BlockGroup"), false, false, false, 0, 0),
    TagRow::new(0x75A1, "BlockAdditions", MASTER, under("BlockGroup"), false, false, false, 1, 4),
    TagRow::new(0xA6, "BlockMore", MASTER, under("BlockAdditions"), true, true, false, 1, 4),
    TagRow::new(0xEE, "BlockAddID", UINT, under("BlockMore"), true, false, false, 1, 4).default(uint(1)).min(1),
    TagRow::new(0xA5, "BlockAdditional", BINARY, under("BlockMore"), true, false, false, 1, 4),
    TagRow::new(0x9B, "BlockDuration", UINT, under("BlockGroup"), false, false, true, 1, 4),
    TagRow::new(0xFA, "ReferencePriority", UINT, under("BlockGroup"), true, false, false, 1, 4).default(uint(0)),
    TagRow::new(0xFB, "ReferenceBlock", INT, under("BlockGroup"), false, true, true, 1, 4),
    TagRow::new(0xFD, "ReferenceVirtual", INT, under("BlockGroup"), false, false, false, 0, 0),
    TagRow::new(0xA4, "CodecState", BINARY, under("BlockGroup"), false, false, false, 2, 4),
    TagRow::new(0x75A2, "DiscardPadding", INT, under("BlockGroup"), false, false, true, 4, 4),
    TagRow::new(0x8E, "Slices", MASTER, under("BlockGroup"), false, false, false, 1, 4),
    TagRow::new(0xE8, "TimeSlice", MASTER, under("Slices"), false, true, false, 1, 4),
    TagRow::new(0xCC, "LaceNumber", UINT, under("TimeSlice"), false, false, false, 1, 4).default(uint(0)),
    TagRow::new(0xAF, "EncryptedBlock", BINARY, under("Cluster"), false, true, false, 0, 0),
    // Tracks
    TagRow::new(0x1654AE6B, "Tracks", MASTER, under("Segment"), false, true, true, 1, 4),
    TagRow::new(0xAE, "TrackEntry", MASTER, under("Tracks"), true, true, true, 1, 4),
    TagRow::new(0xD7, "TrackNumber", UINT, under("TrackEntry"), true, false, true, 1, 4).min(1),
    TagRow::new(0x73C5, "TrackUID", UINT, under("TrackEntry"), true, false, true, 1, 4).min(1),
    TagRow::new(0x83, "TrackType", UINT, under("TrackEntry"), true, false, true, 1, 4).min(1).max(254),
    TagRow::new(0xB9, "FlagEnabled", BOOL, under("TrackEntry"), true, false, true, 2, 4).default(uint(1)).max(1),
    TagRow::new(0x88, "FlagDefault", BOOL, under("TrackEntry"), true, false, true, 1, 4).default(uint(1)).max(1),
    TagRow::new(0x55AA, "FlagForced", BOOL, under("TrackEntry"), true, false, true, 1, 4).default(uint(0)).max(1),
    TagRow::new(0x9C, "FlagLacing", BOOL, under("TrackEntry"), true, false, true, 1, 4).default(uint(1)).max(1),
    TagRow::new(0x6DE7, "MinCache", UINT, under("TrackEntry"), true, false, false, 1, 4).default(uint(0)),
    TagRow::new(0x6DF8, "MaxCache", UINT, under("TrackEntry"), false, false, false, 1, 4),
    TagRow::new(0x23E383, "DefaultDuration", UINT, under("TrackEntry"), false, false, true, 1, 4).min(1),
    TagRow::new(0x234E7A, "DefaultDecodedFieldDuration", UINT, under("TrackEntry"), false, false, false, 4, 4).min(1),
    TagRow::new(0x23314F, "TrackTimecodeScale", FLOAT, under("TrackEntry"), true, false, false, 1, 3).default(RowDefault::Float(1.0)).above(0.0),
    TagRow::new(0x537F, "TrackOffset", INT, under("TrackEntry"), false, false, false, 0, 0).default(RowDefault::Signed(0)),
    TagRow::new(0x55EE, "MaxBlockAdditionID", UINT, under("TrackEntry"), true, false, false, 1, 4).default(uint(0)),
    TagRow::new(0x536E, "Name", UTF8, under("TrackEntry"), false, false, true, 1, 4),
    TagRow::new(0x22B59C, "Language", STRING, under("TrackEntry"), false, false, true, 1, 4).default(RowDefault::Str("eng")),
    TagRow::new(0x86, "CodecID", STRING, under("TrackEntry"), true, false, true, 1, 4),
    TagRow::new(0x63A2, "CodecPrivate", BINARY, under("TrackEntry"), false, false, true, 1, 4),
    TagRow::new(0x258688, "CodecName", UTF8, under("TrackEntry"), false, false, true, 1, 4),
    TagRow::new(0x7446, "AttachmentLink", UINT, under("TrackEntry"), false, false, false, 1, 4).min(1),
    TagRow::new(0x3A9697, "CodecSettings", UTF8, under("TrackEntry"), false, false, false, 0, 0),
    TagRow::new(0x3B4040, "CodecInfoURL", STRING, under("TrackEntry"), false, true, false, 0, 0),
    TagRow::new(0x26B240, "CodecDownloadURL", STRING, under("TrackEntry"), false, true, false, 0, 0),
    TagRow::new(0xAA, "CodecDecodeAll", BOOL, under("TrackEntry"), true, false, false, 2, 4).default(uint(1)).max(1),
    TagRow::new(0x6FAB, "TrackOverlay", UINT, under("TrackEntry"), false, true, false, 1, 4),
    TagRow::new(0x56AA, "CodecDelay", UINT, under("TrackEntry"), false, false, true, 4, 4).default(uint(0)),
    TagRow::new(0x56BB, "SeekPreRoll", UINT, under("TrackEntry"), true, false, true, 4, 4).default(uint(0)),
    TagRow::new(0x6624, "TrackTranslate", MASTER, under("TrackEntry"), false, true, false, 1, 4),
    TagRow::new(0x66FC, "TrackTranslateEditionUID", UINT, under("TrackTranslate"), false, true, false, 1, 4),
    TagRow::new(0x66BF, "TrackTranslateCodec", UINT, under("TrackTranslate"), true, false, false, 1, 4),
    TagRow::new(0x66A5, "TrackTranslateTrackID", BINARY, under("TrackTranslate"), true, false, false, 1, 4),
    // Video
    TagRow::new(0xE0, "Video", MASTER, under("TrackEntry"), false, false, true, 1, 4),
    TagRow::new(0x9A, "FlagInterlaced", BOOL, under("Video"), true, false, true, 2, 4).default(uint(0)).max(1),
    TagRow::new(0x53B8, "StereoMode", UINT, under("Video"), false, false, true, 3, 4).default(uint(0)),
    TagRow::new(0x53C0, "AlphaMode", UINT, under("Video"), false, false, true, 3, 4).default(uint(0)),
    TagRow::new(0x53B9, "OldStereoMode", UINT, under("Video"), false, false, false, 0, 0),
    TagRow::new(0xB0, "PixelWidth", UINT, under("Video"), true, false, true, 1, 4).min(1),
    TagRow::new(0xBA, "PixelHeight", UINT, under("Video"), true, false, true, 1, 4).min(1),
    TagRow::new(0x54AA, "PixelCropBottom", UINT, under("Video"), false, false, true, 1, 4).default(uint(0)),
    TagRow::new(0x54BB, "PixelCropTop", UINT, under("Video"), false, false, true, 1, 4).default(uint(0)),
    TagRow::new(0x54CC, "PixelCropLeft", UINT, under("Video"), false, false, true, 1, 4).default(uint(0)),
    TagRow::new(0x54DD, "PixelCropRight", UINT, under("Video"), false, false, true, 1, 4).default(uint(0)),
    TagRow::new(0x54B0, "DisplayWidth", UINT, under("Video"), false, false, true, 1, 4).min(1),
    TagRow::new(0x54BA, "DisplayHeight", UINT, under("Video"), false, false, true, 1, 4).min(1),
    TagRow::new(0x54B2, "DisplayUnit", UINT, under("Video"), false, false, true, 1, 4).default(uint(0)),
    TagRow::new(0x54B3, "AspectRatioType", UINT, under("Video"), false, false, true, 1, 4).default(uint(0)),
    TagRow::new(0x2EB524, "ColourSpace", BINARY, under("Video"), false, false, false, 1, 4),
    TagRow::new(0x2FB523, "GammaValue", FLOAT, under("Video"), false, false, false, 0, 0).above(0.0),
    TagRow::new(0x2383E3, "FrameRate", FLOAT, under("Video"), false, false, false, 0, 0).above(0.0),
    TagRow::new(0x55B0, "Colour", MASTER, under("Video"), false, false, true, 4, 4),
    // Audio
    TagRow::new(0xE1, "Audio", MASTER, under("TrackEntry"), false, false, true, 1, 4),
    TagRow::new(0xB5, "SamplingFrequency", FLOAT, under("Audio"), true, false, true, 1, 4).default(RowDefault::Float(8000.0)).above(0.0),
    TagRow::new(0x78B5, "OutputSamplingFrequency", FLOAT, under("Audio"), false, false, true, 1, 4).above(0.0),
    TagRow::new(0x9F, "Channels", UINT, under("Audio"), true, false, true, 1, 4).default(uint(1)).min(1),
    TagRow::new(0x7D7B, "ChannelPositions", BINARY, under("Audio"), false, false, false, 0, 0),
    TagRow::new(0x6264, "BitDepth", UINT, under("Audio"), false, false, true, 1, 4).min(1),
    // Track operations
    TagRow::new(0xE2, "TrackOperation", MASTER, under("TrackEntry"), false, false, false, 3, 4),
    TagRow::new(0xE3, "TrackCombinePlanes", MASTER, under("TrackOperation"), false, false, false, 3, 4),
    TagRow::new(0xE4, "TrackPlane", MASTER, under("TrackCombinePlanes"), true, true, false, 3, 4),
    TagRow::new(0xE5, "TrackPlaneUID", UINT, under("TrackPlane"), true, false, false, 3, 4).min(1),
    TagRow::new(0xE6, "TrackPlaneType", UINT, under("TrackPlane"), true, false, false, 3, 4),
    TagRow::new(0xE9, "TrackJoinBlocks", MASTER, under("TrackOperation"), false, false, false, 3, 4),
    TagRow::new(0xED, "TrackJoinUID", UINT, under("TrackJoinBlocks"), true, true, false, 3, 4).min(1),
    // Content encoding
    TagRow::new(0x6D80, "ContentEncodings", MASTER, under("TrackEntry"), false, false, true, 1, 4),
    TagRow::new(0x6240, "ContentEncoding", MASTER, under("ContentEncodings"), true, true, true, 1, 4),
    TagRow::new(0x5031, "ContentEncodingOrder", UINT, under("ContentEncoding"), true, false, true, 1, 4).default(uint(0)),
    TagRow::new(0x5032, "ContentEncodingScope", UINT, under("ContentEncoding"), true, false, true, 1, 4).default(uint(1)).min(1),
    TagRow::new(0x5033, "ContentEncodingType", UINT, under("ContentEncoding"), true, false, true, 1, 4).default(uint(0)),
    TagRow::new(0x5034, "ContentCompression", MASTER, under("ContentEncoding"), false, false, false, 1, 4),
    TagRow::new(0x4254, "ContentCompAlgo", UINT, under("ContentCompression"), true, false, false, 1, 4).default(uint(0)),
    TagRow::new(0x4255, "ContentCompSettings", BINARY, under("ContentCompression"), false, false, false, 1, 4),
    TagRow::new(0x5035, "ContentEncryption", MASTER, under("ContentEncoding"), false, false, true, 1, 4),
    TagRow::new(0x47E1, "ContentEncAlgo", UINT, under("ContentEncryption"), false, false, true, 1, 4).default(uint(0)),
    TagRow::new(0x47E2, "ContentEncKeyID", BINARY, under("ContentEncryption"), false, false, true, 1, 4),
    TagRow::new(0x47E3, "ContentSignature", BINARY, under("ContentEncryption"), false, false, false, 1, 4),
    TagRow::new(0x47E4, "ContentSigKeyID", BINARY, under("ContentEncryption"), false, false, false, 1, 4),
    TagRow::new(0x47E5, "ContentSigAlgo", UINT, under("ContentEncryption"), false, false, false, 1, 4).default(uint(0)),
    TagRow::new(0x47E6, "ContentSigHashAlgo", UINT, under("ContentEncryption"), false, false, false, 1, 4).default(uint(0)),
    // Cueing data
    TagRow::new(0x1C53BB6B, "Cues", MASTER, under("Segment"), false, false, true, 1, 4),
    TagRow::new(0xBB, "CuePoint", MASTER, under("Cues"), true, true, true, 1, 4),
    TagRow::new(0xB3, "CueTime", UINT, under("CuePoint"), true, false, true, 1, 4),
    TagRow::new(0xB7, "CueTrackPositions", MASTER, under("CuePoint"), true, true, true, 1, 4),
    TagRow::new(0xF7, "CueTrack", UINT, under("CueTrackPositions"), true, false, true, 1, 4).min(1),
    TagRow::new(0xF1, "CueClusterPosition", UINT, under("CueTrackPositions"), true, false, true, 1, 4),
    TagRow::new(0xF0, "CueRelativePosition", UINT, under("CueTrackPositions"), false, false, true, 4, 4),
    TagRow::new(0xB2, "CueDuration", UINT, under("CueTrackPositions"), false, false, true, 4, 4),
    TagRow::new(0x5378, "CueBlockNumber", UINT, under("CueTrackPositions"), false, false, true, 1, 4).min(1),
    TagRow::new(0xEA, "CueCodecState", UINT, under("CueTrackPositions"), false, false, false, 2, 4).default(uint(0)),
    TagRow::new(0xDB, "CueReference", MASTER, under("CueTrackPositions"), false, true, false, 2, 4),
    TagRow::new(0x96, "CueRefTime", UINT, under("CueReference"), true, false, false, 2, 4),
    // Attachments
    TagRow::new(0x1941A469, "Attachments", MASTER, under("Segment"), false, false, false, 1, 4),
    TagRow::new(0x61A7, "AttachedFile", MASTER, under("Attachments"), true, true, false, 1, 4),
    TagRow::new(0x467E, "FileDescription", UTF8, under("AttachedFile"), false, false, false, 1, 4),
    TagRow::new(0x466E, "FileName", UTF8, under("AttachedFile"), true, false, false, 1, 4),
    TagRow::new(0x4660, "FileMimeType", STRING, under("AttachedFile"), true, false, false, 1, 4),
    TagRow::new(0x465C, "FileData", BINARY, under("AttachedFile"), true, false, false, 1, 4),
    TagRow::new(0x46AE, "FileUID", UINT, under("AttachedFile"), true, false, false, 1, 4).min(1),
    // Chapters
    TagRow::new(0x1043A770, "Chapters", MASTER, under("Segment"), false, false, true, 1, 4),
    TagRow::new(0x45B9, "EditionEntry", MASTER, under("Chapters"), true, true, true, 1, 4),
    TagRow::new(0x45BC, "EditionUID", UINT, under("EditionEntry"), false, false, false, 1, 4).min(1),
    TagRow::new(0x45BD, "EditionFlagHidden", BOOL, under("EditionEntry"), true, false, false, 1, 4).default(uint(0)).max(1),
    TagRow::new(0x45DB, "EditionFlagDefault", BOOL, under("EditionEntry"), true, false, false, 1, 4).default(uint(0)).max(1),
    TagRow::new(0x45DD, "EditionFlagOrdered", BOOL, under("EditionEntry"), false, false, false, 1, 4).default(uint(0)).max(1),
    TagRow::new(0xB6, "ChapterAtom", MASTER, under("EditionEntry"), true, true, true, 1, 4).recursive(),
    TagRow::new(0x73C4, "ChapterUID", UINT, under("ChapterAtom"), true, false, true, 1, 4).min(1),
    TagRow::new(0x5654, "ChapterStringUID", UTF8, under("ChapterAtom"), false, false, true, 3, 4),
    TagRow::new(0x91, "ChapterTimeStart", UINT, under("ChapterAtom"), true, false, true, 1, 4),
    TagRow::new(0x92, "ChapterTimeEnd", UINT, under("ChapterAtom"), false, false, true, 1, 4),
    TagRow::new(0x98, "ChapterFlagHidden", BOOL, under("ChapterAtom"), true, false, false, 1, 4).default(uint(0)).max(1),
    TagRow::new(0x4598, "ChapterFlagEnabled", BOOL, under("ChapterAtom"), true, false, false, 1, 4).default(uint(1)).max(1),
    TagRow::new(0x6E67, "ChapterSegmentUID", BINARY, under("ChapterAtom"), false, false, false, 1, 4),
    TagRow::new(0x6EBC, "ChapterSegmentEditionUID", UINT, under("ChapterAtom"), false, false, false, 1, 4).min(1),
    TagRow::new(0x63C3, "ChapterPhysicalEquiv", UINT, under("ChapterAtom"), false, false, false, 1, 4),
    TagRow::new(0x8F, "ChapterTrack", MASTER, under("ChapterAtom"), false, false, false, 1, 4),
    TagRow::new(0x89, "ChapterTrackNumber", UINT, under("ChapterTrack"), true, true, false, 1, 4).min(1),
    TagRow::new(0x80, "ChapterDisplay", MASTER, under("ChapterAtom"), false, true, true, 1, 4),
    TagRow::new(0x85, "ChapString", UTF8, under("ChapterDisplay"), true, false, true, 1, 4),
    TagRow::new(0x437C, "ChapLanguage", STRING, under("ChapterDisplay"), true, true, true, 1, 4).default(RowDefault::Str("eng")),
    TagRow::new(0x437E, "ChapCountry", STRING, under("ChapterDisplay"), false, true, true, 1, 4),
    TagRow::new(0x6944, "ChapProcess", MASTER, under("ChapterAtom"), false, true, false, 1, 4),
    TagRow::new(0x6955, "ChapProcessCodecID", UINT, under("ChapProcess"), true, false, false, 1, 4).default(uint(0)),
    TagRow::new(0x450D, "ChapProcessPrivate", BINARY, under("ChapProcess"), false, false, false, 1, 4),
    TagRow::new(0x6911, "ChapProcessCommand", MASTER, under("ChapProcess"), false, true, false, 1, 4),
    TagRow::new(0x6922, "ChapProcessTime", UINT, under("ChapProcessCommand"), true, false, false, 1, 4),
    TagRow::new(0x6933, "ChapProcessData", BINARY, under("ChapProcessCommand"), true, false, false, 1, 4),
    // Tagging
    TagRow::new(0x1254C367, "Tags", MASTER, under("Segment"), false, true, true, 1, 4),
    TagRow::new(0x7373, "Tag", MASTER, under("Tags"), true, true, true, 1, 4),
    TagRow::new(0x63C0, "Targets", MASTER, under("Tag"), true, false, true, 1, 4),
    TagRow::new(0x68CA, "TargetTypeValue", UINT, under("Targets"), false, false, true, 1, 4).default(uint(50)),
    TagRow::new(0x63CA, "TargetType", STRING, under("Targets"), false, false, true, 1, 4),
    TagRow::new(0x63C5, "TagTrackUID", UINT, under("Targets"), false, true, true, 1, 4).default(uint(0)),
    TagRow::new(0x63C9, "TagEditionUID", UINT, under("Targets"), false, true, false, 1, 4).default(uint(0)),
    TagRow::new(0x63C4, "TagChapterUID", UINT, under("Targets"), false, true, false, 1, 4).default(uint(0)),
    TagRow::new(0x63C6, "TagAttachmentUID", UINT, under("Targets"), false, true, false, 1, 4).default(uint(0)),
    TagRow::new(0x67C8, "SimpleTag", MASTER, under("Tag"), true, true, true, 1, 4).recursive(),
    TagRow::new(0x45A3, "TagName", UTF8, under("SimpleTag"), true, false, true, 1, 4),
    TagRow::new(0x447A, "TagLanguage", STRING, under("SimpleTag"), true, false, true, 1, 4).default(RowDefault::Str("und")),
    TagRow::new(0x4484, "TagDefault", BOOL, under("SimpleTag"), true, false, true, 1, 4).default(uint(1)).max(1),
    TagRow::new(0x4487, "TagString", UTF8, under("SimpleTag"), false, false, true, 1, 4),
    TagRow::new(0x4485, "TagBinary", BINARY, under("SimpleTag"), false, false, true, 1, 4),
];
