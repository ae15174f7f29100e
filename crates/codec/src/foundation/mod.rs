//! Core codec types and traits
//!
//! This module contains the building blocks every codec is made of:
//!
//! - **Trait**: [`Codec`] with the derived `decode` / `parse`
//! - **Location**: [`Path`], [`PathSegment`], [`ValidationContext`]
//! - **Results**: [`Issue`], [`Issues`], [`IssueCollector`], [`ValidationResult`]
//! - **Errors**: [`ParseError`]
//! - **Metadata**: [`CodecMetadata`], [`Metadata`], [`SimpleMetadata`]
//!
//! # Two failure channels
//!
//! `validate` and `decode` report failure as data: `Err(Issues)`. Composed
//! codecs work on this channel only, so they can gather issues from several
//! children before giving up. `parse` is the fail-fast surface and turns
//! the same issues into a [`ParseError`] for `?` propagation.

pub mod context;
pub mod error;
pub mod issue;
pub mod metadata;
pub mod path;
pub mod traits;

pub use context::ValidationContext;
pub use error::ParseError;
pub use issue::{EmptyIssues, Issue, IssueCollector, Issues, ValidationResult};
pub use metadata::{CodecMetadata, DEFAULT_TAG, Metadata, SimpleCodecMetadata, SimpleMetadata};
pub use path::{Path, PathSegment};
pub use traits::{BoxCodec, Codec, InputOf, MetadataOf, TypeOf};
