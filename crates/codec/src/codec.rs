//! Building codecs from functions
//!
//! Most codecs never implement [`Codec`] by hand. They hand a `validate`
//! function and an `encode` function to [`create_codec`], which derives
//! `decode` and `parse` and fills in default metadata. Leaf codecs whose
//! decoded type equals their input use [`create_simple_codec`] and skip the
//! encoder entirely.
//!
//! # Examples
//!
//! ```
//! use nebula_codec::prelude::*;
//! use serde_json::{Value, json};
//!
//! let number = create_simple_codec(SimpleCodecConfig::new(
//!     |value: &Value, ctx: &ValidationContext| match value {
//!         Value::Number(_) => Ok(value.clone()),
//!         other => ctx.type_mismatch("number", other),
//!     },
//! ));
//!
//! assert_eq!(number.decode(&json!(5)), Ok(json!(5)));
//! assert!(number.decode(&json!("x")).is_err());
//! assert!(number.is_simple());
//! ```

use crate::foundation::{
    Codec, CodecMetadata, Metadata, SimpleCodecMetadata, SimpleMetadata, ValidationContext,
    ValidationResult,
};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Returns its argument. This is the encoder of every simple codec.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Everything [`create_codec`] needs to build a codec.
///
/// `validate` and `encode` are required. `metadata` defaults to
/// [`Metadata::default`] (tag `"unknown"`, not simple) and can be swapped
/// with [`with_metadata`](Self::with_metadata).
#[derive(Debug, Clone)]
pub struct CodecConfig<V, E, M = Metadata> {
    /// Validation function: `(value, context) -> ValidationResult<T>`.
    pub validate: V,
    /// Encoding function: `T -> I`.
    pub encode: E,
    /// Static descriptor.
    pub metadata: M,
}

impl<V, E> CodecConfig<V, E> {
    /// Creates a configuration with default metadata.
    pub fn new<I, T>(validate: V, encode: E) -> Self
    where
        V: Fn(&Value, &ValidationContext) -> ValidationResult<T>,
        E: Fn(T) -> I,
    {
        Self {
            validate,
            encode,
            metadata: Metadata::default(),
        }
    }
}

impl<V, E, M> CodecConfig<V, E, M> {
    /// Replaces the metadata.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_metadata<N: CodecMetadata>(self, metadata: N) -> CodecConfig<V, E, N> {
        CodecConfig {
            validate: self.validate,
            encode: self.encode,
            metadata,
        }
    }
}

/// Everything [`create_simple_codec`] needs to build a codec.
///
/// `metadata` defaults to [`SimpleMetadata::default`] (tag `"unknown"`).
#[derive(Debug, Clone)]
pub struct SimpleCodecConfig<V, M = SimpleMetadata> {
    /// Validation function: `(value, context) -> ValidationResult<T>`.
    pub validate: V,
    /// Static descriptor; always simple.
    pub metadata: M,
}

impl<V> SimpleCodecConfig<V> {
    /// Creates a configuration with default metadata.
    pub fn new<T>(validate: V) -> Self
    where
        V: Fn(&Value, &ValidationContext) -> ValidationResult<T>,
    {
        Self {
            validate,
            metadata: SimpleMetadata::default(),
        }
    }
}

impl<V, M> SimpleCodecConfig<V, M> {
    /// Replaces the metadata.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_metadata<N: SimpleCodecMetadata>(self, metadata: N) -> SimpleCodecConfig<V, N> {
        SimpleCodecConfig {
            validate: self.validate,
            metadata,
        }
    }
}

// ============================================================================
// FUNCTION-BACKED CODEC
// ============================================================================

/// A codec assembled from a validate function and an encode function.
///
/// # Type Parameters
///
/// * `I` - Input representation produced by `encode`
/// * `T` - Decoded type
/// * `V` - Validation function type
/// * `E` - Encoding function type
/// * `M` - Metadata type
pub struct FnCodec<I, T, V, E, M = Metadata> {
    validate: V,
    encode: E,
    metadata: M,
    _phantom: PhantomData<fn(T) -> I>,
}

/// A codec whose input representation is its decoded type.
pub type SimpleFnCodec<T, V, M = SimpleMetadata> = FnCodec<T, T, V, fn(T) -> T, M>;

impl<I, T, V, E, M> FnCodec<I, T, V, E, M> {
    /// Returns a reference to the validation function.
    pub fn validate_fn(&self) -> &V {
        &self.validate
    }

    /// Returns a reference to the encoding function.
    pub fn encode_fn(&self) -> &E {
        &self.encode
    }

    /// Takes the codec apart into the configuration it was built from.
    pub fn into_config(self) -> CodecConfig<V, E, M> {
        CodecConfig {
            validate: self.validate,
            encode: self.encode,
            metadata: self.metadata,
        }
    }
}

// Clone impl - manual because I and T need not be Clone
impl<I, T, V, E, M> Clone for FnCodec<I, T, V, E, M>
where
    V: Clone,
    E: Clone,
    M: Clone,
{
    fn clone(&self) -> Self {
        Self {
            validate: self.validate.clone(),
            encode: self.encode.clone(),
            metadata: self.metadata.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<I, T, V, E, M> fmt::Debug for FnCodec<I, T, V, E, M>
where
    M: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec")
            .field("metadata", &self.metadata)
            .field("validate", &"<function>")
            .field("encode", &"<function>")
            .finish()
    }
}

impl<I, T, V, E, M> Codec for FnCodec<I, T, V, E, M>
where
    V: Fn(&Value, &ValidationContext) -> ValidationResult<T>,
    E: Fn(T) -> I,
    M: CodecMetadata,
{
    type Input = I;
    type Output = T;
    type Metadata = M;

    #[inline]
    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidationResult<T> {
        (self.validate)(value, context)
    }

    #[inline]
    fn encode(&self, value: T) -> I {
        (self.encode)(value)
    }

    fn metadata(&self) -> &M {
        &self.metadata
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Builds a codec from a [`CodecConfig`].
///
/// `validate` and `encode` are stored as given. `decode` runs `validate`
/// from the root context and `parse` wraps `decode`. Construction cannot
/// fail.
///
/// # Examples
///
/// ```
/// use nebula_codec::prelude::*;
/// use serde_json::{Value, json};
///
/// // Decodes "true"/"false" strings into booleans.
/// let flag = create_codec(
///     CodecConfig::new(
///         |value: &Value, ctx: &ValidationContext| match value.as_str() {
///             Some("true") => Ok(true),
///             Some("false") => Ok(false),
///             Some(_) => ctx.fail("invalid_flag", "expected \"true\" or \"false\""),
///             None => ctx.type_mismatch("string", value),
///         },
///         |flag: bool| Value::String(flag.to_string()),
///     )
///     .with_metadata(Metadata::new("flag")),
/// );
///
/// assert_eq!(flag.decode(&json!("true")), Ok(true));
/// assert_eq!(flag.encode(false), json!("false"));
/// assert_eq!(flag.tag(), "flag");
/// ```
pub fn create_codec<I, T, V, E, M>(config: CodecConfig<V, E, M>) -> FnCodec<I, T, V, E, M>
where
    V: Fn(&Value, &ValidationContext) -> ValidationResult<T>,
    E: Fn(T) -> I,
    M: CodecMetadata,
{
    FnCodec {
        validate: config.validate,
        encode: config.encode,
        metadata: config.metadata,
        _phantom: PhantomData,
    }
}

/// Builds a codec whose encoder is [`identity`].
pub fn create_simple_codec<T, V, M>(config: SimpleCodecConfig<V, M>) -> SimpleFnCodec<T, V, M>
where
    V: Fn(&Value, &ValidationContext) -> ValidationResult<T>,
    M: SimpleCodecMetadata,
{
    debug_assert!(
        config.metadata.is_simple(),
        "SimpleCodecMetadata implementor `{}` reports is_simple() == false",
        config.metadata.tag()
    );
    create_codec(CodecConfig {
        validate: config.validate,
        encode: identity::<T> as fn(T) -> T,
        metadata: config.metadata,
    })
}

// ============================================================================
// TESTS
// ============================================================================
