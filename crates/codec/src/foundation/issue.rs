//! Validation issues and the result type built on them
//!
//! An [`Issue`] is one located failure. A failed validation always carries
//! at least one, which [`Issues`] enforces by construction: there is no way
//! to build an empty list, so a failed [`ValidationResult`] can never drop
//! its reason on the floor.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! do not allocate.

use crate::foundation::Path;
use crate::json::kind_of;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::{SmallVec, smallvec};
use std::borrow::Cow;
use std::fmt;

/// Outcome of `validate` / `decode`: the decoded value or the issues found.
pub type ValidationResult<T> = Result<T, Issues>;

// ============================================================================
// ISSUE
// ============================================================================

/// A single validation failure located by its [`Path`].
///
/// # Examples
///
/// ```
/// use nebula_codec::{Issue, Path};
///
/// let issue = Issue::new(Path::from("age"), "too_small", "must be at least 18")
///     .with_param("min", "18");
///
/// assert_eq!(issue.param("min"), Some("18"));
/// assert_eq!(issue.to_string(), "[age] too_small: must be at least 18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Where in the input the failure occurred.
    pub path: Path,

    /// Machine-readable kind, e.g. `"type_mismatch"`.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Extra key/value detail, usually zero to two entries.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl Issue {
    /// Creates an issue at `path`.
    pub fn new(
        path: impl Into<Path>,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            path: path.into(),
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Creates a `type_mismatch` issue naming the expected kind and the
    /// kind actually found.
    pub fn type_mismatch(
        path: impl Into<Path>,
        expected: impl Into<Cow<'static, str>>,
        actual: &Value,
    ) -> Self {
        let expected = expected.into();
        let actual = kind_of(actual);
        Self::new(path, "type_mismatch", format!("expected {expected}, got {actual}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            return write!(f, "{}: {}", self.code, self.message);
        }
        // Paths that already open with a bracket are not wrapped again.
        let path = self.path.to_string();
        if path.starts_with('[') {
            write!(f, "{path} {}: {}", self.code, self.message)
        } else {
            write!(f, "[{path}] {}: {}", self.code, self.message)
        }
    }
}

// ============================================================================
// ISSUES
// ============================================================================

/// A list holding at least one [`Issue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Issue>", into = "Vec<Issue>")]
pub struct Issues(SmallVec<[Issue; 1]>);

/// Returned when an empty list is turned into [`Issues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a failed validation must carry at least one issue")]
pub struct EmptyIssues;

#[allow(clippy::len_without_is_empty)]
impl Issues {
    /// A list of exactly one issue.
    #[must_use]
    pub fn single(issue: Issue) -> Self {
        Self(smallvec![issue])
    }

    /// Wraps a vector, returning `None` if it is empty.
    #[must_use]
    pub fn from_vec(issues: Vec<Issue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self(SmallVec::from_vec(issues)))
        }
    }

    /// Appends one issue.
    pub fn push(&mut self, issue: Issue) {
        self.0.push(issue);
    }

    /// Moves every issue of `other` to the end of this list.
    pub fn append(&mut self, other: Issues) {
        self.0.extend(other.0);
    }

    /// Number of issues, never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The first issue recorded.
    pub fn first(&self) -> &Issue {
        &self.0[0]
    }

    /// Iterates over the issues in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.0.iter()
    }

    /// The issues as a slice.
    pub fn as_slice(&self) -> &[Issue] {
        &self.0
    }

    /// Consumes the list.
    pub fn into_vec(self) -> Vec<Issue> {
        self.0.into_vec()
    }
}

impl From<Issue> for Issues {
    fn from(issue: Issue) -> Self {
        Self::single(issue)
    }
}

impl TryFrom<Vec<Issue>> for Issues {
    type Error = EmptyIssues;

    fn try_from(issues: Vec<Issue>) -> Result<Self, Self::Error> {
        Self::from_vec(issues).ok_or(EmptyIssues)
    }
}

impl From<Issues> for Vec<Issue> {
    fn from(issues: Issues) -> Self {
        issues.into_vec()
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = smallvec::IntoIter<[Issue; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

// ============================================================================
// ISSUE COLLECTOR
// ============================================================================

/// Accumulates issues from several sub-validations.
///
/// The collector only gathers. Whether to keep validating siblings after the
/// first failure is up to the codec that drives it.
///
/// # Examples
///
/// ```
/// use nebula_codec::{IssueCollector, ValidationContext};
///
/// let ctx = ValidationContext::root();
/// let mut collector = IssueCollector::new();
///
/// let a: Option<i64> = collector.absorb(ctx.field("a").fail("missing", "field is required"));
/// let b = collector.absorb(Ok::<_, nebula_codec::Issues>(2));
///
/// assert_eq!(a, None);
/// assert_eq!(b, Some(2));
/// assert_eq!(collector.finish(()).unwrap_err().first().path.to_string(), "a");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
}

impl IssueCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one issue.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Records every issue in `issues`.
    pub fn extend(&mut self, issues: Issues) {
        self.issues.extend(issues);
    }

    /// Records the issues of a failed result and returns the value of a
    /// successful one.
    pub fn absorb<T>(&mut self, result: ValidationResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(issues) => {
                self.extend(issues);
                None
            }
        }
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of issues recorded so far.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// The recorded issues, or `None` if there are none.
    pub fn into_issues(self) -> Option<Issues> {
        Issues::from_vec(self.issues)
    }

    /// `Ok(value)` if nothing was recorded, otherwise every recorded issue.
    pub fn finish<T>(self, value: T) -> ValidationResult<T> {
        match self.into_issues() {
            None => Ok(value),
            Some(issues) => Err(issues),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
