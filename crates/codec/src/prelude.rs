//! Prelude for convenient imports.
//!
//! ```rust
//! use nebula_codec::prelude::*;
//! ```

pub use crate::codec::{
    CodecConfig, FnCodec, SimpleCodecConfig, SimpleFnCodec, create_codec, create_simple_codec,
    identity,
};
pub use crate::foundation::{
    BoxCodec, Codec, CodecMetadata, Issue, IssueCollector, Issues, Metadata, ParseError, Path,
    PathSegment, SimpleCodecMetadata, SimpleMetadata, ValidationContext, ValidationResult,
};
