//! Static descriptors attached to every codec
//!
//! Metadata is fixed when a codec is built and never depends on data. It
//! lets tooling (documentation generators, format inference) tell what kind
//! of codec it is looking at without running it.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Debug;

/// Tag used when a codec is built without explicit metadata.
pub const DEFAULT_TAG: &str = "unknown";

/// Anything that can serve as a codec's metadata.
///
/// Implement this for richer descriptors; the two methods are all the core
/// relies on.
pub trait CodecMetadata: Debug {
    /// Logical kind of the codec, e.g. the combinator that produced it.
    fn tag(&self) -> &str;

    /// Whether the codec's input representation equals its decoded type.
    fn is_simple(&self) -> bool;
}

// ============================================================================
// METADATA
// ============================================================================

/// General metadata: a tag plus the simple flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metadata {
    /// Logical kind of the codec.
    pub tag: Cow<'static, str>,
    /// Whether input and decoded types coincide.
    pub simple: bool,
}

impl Metadata {
    /// Metadata for a transforming codec.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            simple: false,
        }
    }

    /// Metadata for a codec whose input and decoded types coincide.
    pub fn simple(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            simple: true,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

impl CodecMetadata for Metadata {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn is_simple(&self) -> bool {
        self.simple
    }
}

// ============================================================================
// SIMPLE METADATA
// ============================================================================

/// Metadata whose simple flag is `true` by type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleMetadata {
    /// Logical kind of the codec.
    pub tag: Cow<'static, str>,
}

impl SimpleMetadata {
    /// Creates simple metadata with the given tag.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Default for SimpleMetadata {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

impl CodecMetadata for SimpleMetadata {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn is_simple(&self) -> bool {
        true
    }
}

/// Metadata that is simple by type, accepted by simple codecs.
///
/// Implementors must return `true` from [`CodecMetadata::is_simple`];
/// [`create_simple_codec`](crate::create_simple_codec) checks this in debug
/// builds.
pub trait SimpleCodecMetadata: CodecMetadata {}

impl SimpleCodecMetadata for SimpleMetadata {}

impl From<SimpleMetadata> for Metadata {
    fn from(metadata: SimpleMetadata) -> Self {
        Self::simple(metadata.tag)
    }
}
