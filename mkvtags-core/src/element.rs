//! Element headers and element shells.
//!
//! This module provides:
//! - [`ElementHeader`] - the per-instance construction context read from a
//!   stream (id, position and sizes)
//! - [`Element`] - a codec instance bound to a descriptor's name, codec
//!   binding and size floors

use crate::codec::CodecKind;

/// Decoded EBML element header.
///
/// # Wire Format
/// ```text
/// +0:       id        (1-4 bytes, marker bits included)
/// +id_len:  data size (1-8 bytes, variable-length integer)
/// +header:  payload   (data size bytes, or unknown)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementHeader {
    /// Element id, including the length marker bits.
    pub id: u64,
    /// Absolute stream offset of the first id byte.
    pub offset: u64,
    /// Encoded header length in bytes (id plus data size).
    pub header_size: u8,
    /// Payload length in bytes, `None` for unknown-size elements.
    pub data_size: Option<u64>,
}

impl ElementHeader {
    /// Largest header an EBML element can have (4-byte id, 8-byte size).
    pub const MAX_HEADER_SIZE: u8 = 12;

    /// Creates a new element header.
    ///
    /// # Arguments
    /// * `id` - Element id
    /// * `offset` - Stream offset of the header
    /// * `header_size` - Encoded header length in bytes
    /// * `data_size` - Payload length, or `None` if unknown
    #[must_use]
    pub const fn new(id: u64, offset: u64, header_size: u8, data_size: Option<u64>) -> Self {
        Self {
            id,
            offset,
            header_size,
            data_size,
        }
    }

    /// Returns the number of bytes the id occupies on the wire.
    #[must_use]
    pub const fn id_length(&self) -> u8 {
        let mut len = 1;
        let mut rest = self.id >> 8;
        while rest != 0 {
            len += 1;
            rest >>= 8;
        }
        len
    }

    /// Returns true if the payload length is unknown.
    #[must_use]
    pub const fn is_unknown_size(&self) -> bool {
        self.data_size.is_none()
    }

    /// Returns the stream offset of the payload, or `None` if it does not
    /// fit in `u64`.
    #[must_use]
    pub const fn data_offset(&self) -> Option<u64> {
        self.offset.checked_add(self.header_size as u64)
    }

    /// Returns the total element size (header + payload), or `None` if the
    /// payload length is unknown or the sum overflows.
    #[must_use]
    pub const fn total_size(&self) -> Option<u64> {
        match self.data_size {
            Some(size) => size.checked_add(self.header_size as u64),
            None => None,
        }
    }
}

/// Codec instance created from an element descriptor.
///
/// The shell carries everything a payload codec needs from the schema; the
/// codec implementation itself lives outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    codec: CodecKind,
    header: ElementHeader,
    header_size_min: u8,
    data_size_min: u64,
}

impl Element {
    /// Creates an element with no size floors.
    #[must_use]
    pub fn new(name: impl Into<String>, codec: CodecKind, header: ElementHeader) -> Self {
        Self {
            name: name.into(),
            codec,
            header,
            header_size_min: 0,
            data_size_min: 0,
        }
    }

    /// Sets the minimal header and payload lengths reserved when the element
    /// is re-encoded.
    #[must_use]
    pub fn with_size_floors(mut self, header_size_min: u8, data_size_min: u64) -> Self {
        self.header_size_min = header_size_min;
        self.data_size_min = data_size_min;
        self
    }

    /// Returns the descriptor name this element was created from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the codec binding.
    #[must_use]
    pub const fn codec(&self) -> CodecKind {
        self.codec
    }

    /// Returns the header this element was created with.
    #[must_use]
    pub const fn header(&self) -> &ElementHeader {
        &self.header
    }

    /// Returns the minimal header length.
    #[must_use]
    pub const fn header_size_min(&self) -> u8 {
        self.header_size_min
    }

    /// Returns the minimal payload length.
    #[must_use]
    pub const fn data_size_min(&self) -> u64 {
        self.data_size_min
    }

    /// Header length to reserve when re-encoding.
    #[must_use]
    pub fn reserved_header_size(&self) -> u8 {
        self.header.header_size.max(self.header_size_min)
    }

    /// Payload length to reserve when re-encoding, if known.
    #[must_use]
    pub fn reserved_data_size(&self) -> Option<u64> {
        self.header
            .data_size
            .map(|size| size.max(self.data_size_min))
    }
}
