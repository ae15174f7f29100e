//! The codec contract
//!
//! This module defines [`Codec`], the trait every schema in Nebula is built
//! on: validate an untyped [`Value`] into a typed output, and encode that
//! output back into the input representation.

use crate::foundation::{
    CodecMetadata, Metadata, ParseError, Path, ValidationContext, ValidationResult,
};
use serde_json::Value;
use std::sync::Arc;

// ============================================================================
// CORE CODEC TRAIT
// ============================================================================

/// A bidirectional validator between untyped values and a typed output.
///
/// Implementors supply [`validate`](Codec::validate), [`encode`](Codec::encode)
/// and [`metadata`](Codec::metadata). [`decode`](Codec::decode) and
/// [`parse`](Codec::parse) are derived from `validate` and should not be
/// overridden.
///
/// # Composition
///
/// A codec built from sub-codecs must call each sub-codec's `validate` with
/// a context extended by the key it is validating, and pass the
/// sub-codec's issues upward unchanged. Calling a sub-codec's `decode`
/// restarts the path at the root and loses the outer location.
///
/// ```rust,ignore
/// fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Pair> {
///     let Some(obj) = value.as_object() else {
///         return ctx.type_mismatch("object", value);
///     };
///     let left = self.left.validate(&obj["left"], &ctx.field("left"))?;
///     let right = self.right.validate(&obj["right"], &ctx.field("right"))?;
///     Ok(Pair { left, right })
/// }
/// ```
///
/// # Encoding
///
/// `encode` is total. It must return a value `decode` would accept back as
/// the same output; a value it cannot represent is a bug in that codec.
pub trait Codec {
    /// Representation produced by `encode`.
    type Input;

    /// Type produced by a successful `decode`.
    type Output;

    /// Static descriptor for tooling.
    type Metadata: CodecMetadata;

    /// Validates `value` at the position described by `context`.
    ///
    /// Failures are returned, never panicked, and always carry at least one
    /// issue.
    fn validate(
        &self,
        value: &Value,
        context: &ValidationContext,
    ) -> ValidationResult<Self::Output>;

    /// Converts a decoded value back to the input representation.
    fn encode(&self, value: Self::Output) -> Self::Input;

    /// The metadata fixed at construction.
    fn metadata(&self) -> &Self::Metadata;

    /// Validates `value` from the root context.
    fn decode(&self, value: &Value) -> ValidationResult<Self::Output> {
        self.validate(value, &ValidationContext::root())
    }

    /// Decodes `value`, turning failure into a [`ParseError`].
    ///
    /// The error carries exactly the issues `decode` returned. Use `?` to
    /// propagate it, or `expect` where a failure should abort.
    fn parse(&self, value: &Value) -> Result<Self::Output, ParseError> {
        self.decode(value).map_err(|issues| {
            tracing::debug!(
                tag = self.tag(),
                issues = issues.len(),
                first = %issues.first(),
                "decode failed"
            );
            ParseError::new(Path::root(), issues)
        })
    }

    /// Shorthand for `self.metadata().tag()`.
    fn tag(&self) -> &str {
        self.metadata().tag()
    }

    /// Shorthand for `self.metadata().is_simple()`.
    fn is_simple(&self) -> bool {
        self.metadata().is_simple()
    }

    /// Erases the concrete type.
    fn boxed(self) -> BoxCodec<Self::Input, Self::Output, Self::Metadata>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

// ============================================================================
// TYPE HELPERS
// ============================================================================

/// The input representation of codec `C`.
pub type InputOf<C> = <C as Codec>::Input;

/// The decoded type of codec `C`.
pub type TypeOf<C> = <C as Codec>::Output;

/// The metadata type of codec `C`.
pub type MetadataOf<C> = <C as Codec>::Metadata;

/// A type-erased, shareable codec.
pub type BoxCodec<I, T, M = Metadata> =
    Box<dyn Codec<Input = I, Output = T, Metadata = M> + Send + Sync>;

// ============================================================================
// FORWARDING IMPLEMENTATIONS
// ============================================================================

impl<C: Codec + ?Sized> Codec for &C {
    type Input = C::Input;
    type Output = C::Output;
    type Metadata = C::Metadata;

    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidationResult<C::Output> {
        (**self).validate(value, context)
    }

    fn encode(&self, value: C::Output) -> C::Input {
        (**self).encode(value)
    }

    fn metadata(&self) -> &C::Metadata {
        (**self).metadata()
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    type Input = C::Input;
    type Output = C::Output;
    type Metadata = C::Metadata;

    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidationResult<C::Output> {
        (**self).validate(value, context)
    }

    fn encode(&self, value: C::Output) -> C::Input {
        (**self).encode(value)
    }

    fn metadata(&self) -> &C::Metadata {
        (**self).metadata()
    }
}

impl<C: Codec + ?Sized> Codec for Arc<C> {
    type Input = C::Input;
    type Output = C::Output;
    type Metadata = C::Metadata;

    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidationResult<C::Output> {
        (**self).validate(value, context)
    }

    fn encode(&self, value: C::Output) -> C::Input {
        (**self).encode(value)
    }

    fn metadata(&self) -> &C::Metadata {
        (**self).metadata()
    }
}

// ============================================================================
// TESTS
// ============================================================================
