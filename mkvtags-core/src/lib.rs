//! # mkvtags Core
//!
//! Core types shared by the Matroska element schema registry and the codecs
//! that consume it.
//!
//! This crate provides:
//! - Codec bindings ([`CodecKind`]) and the codec-class namespace used to
//!   resolve them from static element tables
//! - Per-instance construction context ([`ElementHeader`]) and the element
//!   shell ([`Element`]) handed out by descriptors
//! - Literal element values ([`Value`], [`Number`])
//! - Error types for core operations

pub mod codec;
pub mod element;
pub mod error;
pub mod value;

pub use codec::{CodecKind, CodecNamespace, StandardCodecs};
pub use element::{Element, ElementHeader};
pub use error::{Error, Result};
pub use value::{Number, Value};
