//! # nebula-codec
//!
//! The codec contract underneath Nebula schemas: turn an untyped
//! [`Value`] into a typed output, or explain precisely where and why it
//! doesn't fit, and encode typed values back.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_codec::prelude::*;
//! use serde_json::{Value, json};
//!
//! let port = create_codec(CodecConfig::new(
//!     |value: &Value, ctx: &ValidationContext| match value.as_u64() {
//!         Some(n) => u16::try_from(n).or_else(|_| ctx.fail("out_of_range", "port must fit in 16 bits")),
//!         None => ctx.type_mismatch("number", value),
//!     },
//!     |port: u16| Value::from(port),
//! ));
//!
//! assert_eq!(port.decode(&json!(8080)), Ok(8080));
//! assert_eq!(port.encode(443), json!(443));
//!
//! let issues = port.decode(&json!("http")).unwrap_err();
//! assert_eq!(issues.first().message, "expected number, got string");
//! assert!(port.parse(&json!(70000)).is_err());
//! ```
//!
//! ## Pieces
//!
//! - [`Codec`]: the contract (`validate`, `encode`, `metadata`, derived
//!   `decode` and `parse`)
//! - [`ValidationContext`]: the path being validated, extended by composed
//!   codecs before they call a child's `validate`
//! - [`Issue`] / [`Issues`] / [`ValidationResult`]: failure as data
//! - [`ParseError`]: failure as an error, produced only by `parse`
//! - [`create_codec`] / [`create_simple_codec`]: build a codec from functions
//!
//! Combinators (objects, arrays, unions) and concrete primitive codecs live
//! on top of this crate.

// Issues keeps one Issue inline and is the failure type of every validate call.
#![allow(clippy::result_large_err)]

pub mod codec;
pub mod foundation;
pub mod json;
pub mod prelude;

pub use codec::{
    CodecConfig, FnCodec, SimpleCodecConfig, SimpleFnCodec, create_codec, create_simple_codec,
    identity,
};
pub use foundation::{
    BoxCodec, Codec, CodecMetadata, DEFAULT_TAG, EmptyIssues, InputOf, Issue, IssueCollector,
    Issues, Metadata, MetadataOf, ParseError, Path, PathSegment, SimpleCodecMetadata,
    SimpleMetadata, TypeOf, ValidationContext, ValidationResult,
};
pub use serde_json::Value;
