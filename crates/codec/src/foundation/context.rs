//! Validation context for locating failures
//!
//! A [`ValidationContext`] records where in the input a codec is currently
//! validating. Composed codecs derive a child context for each nested value
//! and hand it to the sub-codec's `validate`, so issues raised deep inside a
//! structure come back with their full path.
//!
//! Deriving a child never touches the parent. Each validation call owns its
//! context, and sibling validations can't see each other's segments.
//!
//! # Examples
//!
//! ```
//! use nebula_codec::ValidationContext;
//!
//! let root = ValidationContext::root();
//! let email = root.field("user").field("emails").index(1);
//!
//! assert_eq!(email.to_string(), "user.emails[1]");
//! assert!(root.path().is_root());
//! ```

use crate::foundation::{Issue, Issues, Path, PathSegment, ValidationResult};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// Where validation is currently taking place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValidationContext {
    path: Path,
}

impl ValidationContext {
    /// Creates a context whose path starts with `segment`.
    ///
    /// Passing `""` yields the root context. Derived contexts keep empty
    /// keys; see [`field`](Self::field).
    pub fn new(segment: impl Into<PathSegment>) -> Self {
        Self {
            path: Path::from(segment.into()),
        }
    }

    /// The root context used by `decode`.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a context positioned at an existing path.
    #[must_use]
    pub fn at(path: Path) -> Self {
        Self { path }
    }

    /// Derives a context one segment deeper. `self` is left unchanged.
    #[must_use]
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        Self {
            path: self.path.child(segment),
        }
    }

    /// Derives a context for an object field.
    #[must_use]
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.child(PathSegment::Key(name.into()))
    }

    /// Derives a context for an array element.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// The current path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Builds an issue located at the current path.
    pub fn issue(
        &self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Issue {
        Issue::new(self.path.clone(), code, message)
    }

    /// Fails with a single issue located at the current path.
    pub fn fail<T>(
        &self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> ValidationResult<T> {
        Err(Issues::single(self.issue(code, message)))
    }

    /// Fails with a `type_mismatch` issue for `actual`.
    pub fn type_mismatch<T>(
        &self,
        expected: impl Into<Cow<'static, str>>,
        actual: &Value,
    ) -> ValidationResult<T> {
        Err(Issues::single(Issue::type_mismatch(
            self.path.clone(),
            expected,
            actual,
        )))
    }
}

impl From<Path> for ValidationContext {
    fn from(path: Path) -> Self {
        Self::at(path)
    }
}

impl fmt::Display for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}

// ============================================================================
// TESTS
// ============================================================================
