//! Error raised by the fail-fast decode path
//!
//! [`ParseError`] is what [`Codec::parse`](crate::Codec::parse) returns
//! instead of a bare issue list. It carries the same issues `decode` would
//! have produced, untouched, and implements `std::error::Error` so it
//! travels through `?` like any other error.

use crate::foundation::{Issue, Issues, Path};

/// A failed decode surfaced as an error value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("decode failed with {} issue(s): {issues}", .issues.len())]
pub struct ParseError {
    path: Path,
    issues: Issues,
}

impl ParseError {
    pub(crate) fn new(path: Path, issues: Issues) -> Self {
        Self { path, issues }
    }

    /// Path the decode started from (the root for `parse`).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The issues reported by validation.
    pub fn issues(&self) -> &Issues {
        &self.issues
    }

    /// The first issue, handy for single-failure codecs.
    pub fn first_issue(&self) -> &Issue {
        self.issues.first()
    }

    /// Consumes the error and returns its issues.
    pub fn into_issues(self) -> Issues {
        self.issues
    }
}

impl From<ParseError> for Issues {
    fn from(error: ParseError) -> Self {
        error.issues
    }
}
