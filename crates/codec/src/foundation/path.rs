//! Structural paths into an untyped value
//!
//! A [`Path`] is the chain of object keys and array indices leading from the
//! root of the input to the value currently being validated. Paths render
//! in the familiar `items[0].name` form and can also be exported as
//! RFC 6901 JSON pointers.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// PATH SEGMENT
// ============================================================================

/// One step in a [`Path`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object field name.
    Key(String),
    /// Array position.
    Index(usize),
}

impl PathSegment {
    /// Returns the key, if this is a key segment.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }

    /// Returns the index, if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(_) => None,
            Self::Index(index) => Some(*index),
        }
    }

    fn is_empty_key(&self) -> bool {
        matches!(self, Self::Key(key) if key.is_empty())
    }
}

/// Keys that would read as something else in dotted form are rendered
/// quoted inside brackets: empty keys, all-digit keys and keys holding
/// `.`, `[`, `]`, `"` or `\`.
fn needs_quoting(key: &str) -> bool {
    key.is_empty()
        || key.bytes().all(|b| b.is_ascii_digit())
        || key.contains(['.', '[', ']', '"', '\\'])
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) if needs_quoting(key) => write!(f, "[{key:?}]"),
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

// ============================================================================
// PATH
// ============================================================================

/// An ordered chain of [`PathSegment`]s.
///
/// Every pushed segment is stored, including the empty key `""` (a legal
/// JSON object key). Only `Path::from("")` treats an empty key as "no
/// segment" and yields the root.
///
/// The dotted rendering quotes keys that would otherwise be ambiguous
/// (`a["b.c"]`, `[""]`). [`to_json_pointer`](Self::to_json_pointer) is the
/// lossless export.
///
/// # Examples
///
/// ```
/// use nebula_codec::Path;
///
/// let path = Path::root().child("items").child(0).child("name");
/// assert_eq!(path.to_string(), "items[0].name");
/// assert_eq!(path.to_json_pointer(), "/items/0/name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<PathSegment>", into = "Vec<PathSegment>")]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Appends a segment in place.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    /// Returns a new path with `segment` appended, leaving `self` untouched.
    #[must_use]
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    /// The segments from the root outwards.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The last segment, if any.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Same as [`is_root`](Self::is_root).
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Renders the path as an RFC 6901 JSON pointer (`""` for the root).
    pub fn to_json_pointer(&self) -> String {
        let mut pointer = String::new();
        for segment in &self.segments {
            pointer.push('/');
            match segment {
                PathSegment::Key(key) => {
                    pointer.push_str(&key.replace('~', "~0").replace('/', "~1"));
                }
                PathSegment::Index(index) => pointer.push_str(&index.to_string()),
            }
        }
        pointer
    }
}

impl From<&str> for Path {
    /// Builds a path of one key segment, or the root for `""`. The key is
    /// not split on `.`.
    fn from(key: &str) -> Self {
        Self::from(PathSegment::from(key))
    }
}

impl From<PathSegment> for Path {
    /// An empty key segment yields the root.
    fn from(segment: PathSegment) -> Self {
        if segment.is_empty_key() {
            Self::root()
        } else {
            Self::root().child(segment)
        }
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        segments.into_iter().collect()
    }
}

impl From<Path> for Vec<PathSegment> {
    fn from(path: Path) -> Self {
        path.segments
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && matches!(segment, PathSegment::Key(key) if !needs_quoting(key)) {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_renders_empty() {
        assert_eq!(Path::root().to_string(), "");
        assert_eq!(Path::root().to_json_pointer(), "");
        assert!(Path::from("").is_root());
    }

    #[test]
    fn empty_key_is_kept_below_root() {
        let path = Path::from("user").child("").child("email");
        assert_eq!(path.len(), 3);
        assert_eq!(path.to_string(), r#"user[""].email"#);
        assert_eq!(path.to_json_pointer(), "/user//email");
    }

    #[test]
    fn ambiguous_keys_render_quoted() {
        let dotted = Path::from("a.b");
        let nested = Path::from("a").child("b");
        assert_eq!(dotted.to_string(), r#"["a.b"]"#);
        assert_eq!(nested.to_string(), "a.b");
        assert_ne!(dotted.to_string(), nested.to_string());

        assert_eq!(Path::root().child("3").to_string(), r#"["3"]"#);
        assert_eq!(Path::root().child(3).to_string(), "[3]");
        assert_eq!(Path::from("x").child("[0]").to_string(), r#"x["[0]"]"#);
        assert_eq!(Path::from("q").child("say \"hi\"").to_string(), r#"q["say \"hi\""]"#);
    }

    #[test]
    fn mixed_segments_render() {
        let path = Path::root().child(2).child("tags").child(0);
        assert_eq!(path.to_string(), "[2].tags[0]");
        assert_eq!(path.last(), Some(&PathSegment::Index(0)));
    }

    #[test]
    fn child_leaves_parent_untouched() {
        let parent = Path::from("a");
        let child = parent.child("b");
        assert_eq!(parent.to_string(), "a");
        assert_eq!(child.to_string(), "a.b");
    }

    #[test]
    fn json_pointer_escapes() {
        let path = Path::root().child("a/b").child("m~n").child(3);
        assert_eq!(path.to_json_pointer(), "/a~1b/m~0n/3");
    }

    #[test]
    fn serializes_as_segment_list() {
        let path = Path::from("servers").child(1).child("host");
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json, serde_json::json!(["servers", 1, "host"]));

        let back: Path = serde_json::from_value(json).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn deserialize_keeps_empty_keys() {
        let path: Path = serde_json::from_value(serde_json::json!(["", "a"])).unwrap();
        assert_eq!(path.segments(), &[PathSegment::from(""), PathSegment::from("a")]);
    }
}
