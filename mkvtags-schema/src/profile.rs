//! Document profiles.
//!
//! A profile is the pair of document type and specification version that
//! decides which element descriptors are active.

use crate::error::ProfileError;
use std::fmt;
use std::str::FromStr;

/// Lowest specification version.
pub const MIN_VERSION: u8 = 1;

/// Highest specification version.
pub const MAX_VERSION: u8 = 4;

/// Container format variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocType {
    /// Full Matroska specification, filtered by version.
    #[default]
    Matroska,
    /// WebM subset, filtered by the per-element webm flag.
    WebM,
}

impl DocType {
    /// Returns the EBML `DocType` string for this variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Matroska => "matroska",
            Self::WebM => "webm",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matroska" => Ok(Self::Matroska),
            "webm" => Ok(Self::WebM),
            _ => Err(ProfileError::UnknownDocType {
                doc_type: s.to_string(),
            }),
        }
    }
}

/// Active document profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    doc_type: DocType,
    version: u8,
}

impl Profile {
    /// Full Matroska specification, version 4.
    pub const MATROSKA_V4: Profile = Profile {
        doc_type: DocType::Matroska,
        version: MAX_VERSION,
    };

    /// Creates a profile, validating the version.
    ///
    /// # Errors
    /// Returns `ProfileError::UnsupportedVersion` if the version is outside
    /// `MIN_VERSION..=MAX_VERSION`.
    pub fn new(doc_type: DocType, version: u8) -> Result<Self, ProfileError> {
        if !(MIN_VERSION..=MAX_VERSION).contains(&version) {
            return Err(ProfileError::UnsupportedVersion {
                version,
                min: MIN_VERSION,
                max: MAX_VERSION,
            });
        }
        Ok(Self { doc_type, version })
    }

    /// Creates a full-specification profile.
    ///
    /// # Errors
    /// See [`Profile::new`].
    pub fn matroska(version: u8) -> Result<Self, ProfileError> {
        Self::new(DocType::Matroska, version)
    }

    /// Creates a WebM profile.
    ///
    /// # Errors
    /// See [`Profile::new`].
    pub fn webm(version: u8) -> Result<Self, ProfileError> {
        Self::new(DocType::WebM, version)
    }

    /// Parses a document type string and version into a profile.
    ///
    /// # Errors
    /// Returns `ProfileError` for an unknown document type or version.
    pub fn parse(doc_type: &str, version: u8) -> Result<Self, ProfileError> {
        Self::new(doc_type.parse()?, version)
    }

    /// Returns the document type.
    #[must_use]
    pub const fn doc_type(&self) -> DocType {
        self.doc_type
    }

    /// Returns the specification version.
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Returns true if this is a WebM profile.
    #[must_use]
    pub const fn is_webm(&self) -> bool {
        matches!(self.doc_type, DocType::WebM)
    }

    /// Decides whether an element with the given flags is active.
    ///
    /// WebM profiles only look at the webm flag; Matroska profiles only look
    /// at the version range.
    #[must_use]
    pub const fn admits(&self, webm: bool, min_version: u8, max_version: u8) -> bool {
        match self.doc_type {
            DocType::WebM => webm,
            DocType::Matroska => min_version <= self.version && self.version <= max_version,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::MATROSKA_V4
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.doc_type, self.version)
    }
}
