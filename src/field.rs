//! Field name paths and field id derivation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when joining a name path into an element id
pub const FIELD_ID_SEPARATOR: &str = "_";

/// One segment of a field name path
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameSegment {
    /// Object key, e.g. `email`
    Key(String),
    /// List index, e.g. `0`
    Index(usize),
}

impl fmt::Display for NameSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSegment::Key(key) => f.write_str(key),
            NameSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

impl From<&str> for NameSegment {
    fn from(value: &str) -> Self {
        NameSegment::Key(value.to_string())
    }
}

impl From<String> for NameSegment {
    fn from(value: String) -> Self {
        NameSegment::Key(value)
    }
}

impl From<usize> for NameSegment {
    fn from(value: usize) -> Self {
        NameSegment::Index(value)
    }
}

/// Ordered path identifying a field, e.g. `["users", 0, "email"]`.
///
/// A single string is always one key: `"user.email"` is not split on dots.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamePath {
    segments: Vec<NameSegment>,
}

impl NamePath {
    pub fn new(segments: Vec<NameSegment>) -> Self {
        Self { segments }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[NameSegment] {
        &self.segments
    }

    /// Append a segment, returning the extended path
    pub fn push(&self, segment: impl Into<NameSegment>) -> Self {
        let mut next = self.clone();
        next.segments.push(segment.into());
        next
    }

    /// Element id for this field.
    ///
    /// Segments are joined with `_` and prefixed with `{form_name}_` when the
    /// owning form is named. An empty path has no id.
    pub fn field_id(&self, form_name: Option<&str>) -> Option<String> {
        if self.segments.is_empty() {
            return None;
        }

        let merged = self
            .segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(FIELD_ID_SEPARATOR);

        Some(match form_name {
            Some(name) if !name.is_empty() => format!("{}{}{}", name, FIELD_ID_SEPARATOR, merged),
            _ => merged,
        })
    }
}

impl fmt::Display for NamePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

impl From<&str> for NamePath {
    fn from(value: &str) -> Self {
        Self::new(vec![value.into()])
    }
}

impl From<String> for NamePath {
    fn from(value: String) -> Self {
        Self::new(vec![value.into()])
    }
}

impl From<usize> for NamePath {
    fn from(value: usize) -> Self {
        Self::new(vec![value.into()])
    }
}

impl From<Vec<NameSegment>> for NamePath {
    fn from(value: Vec<NameSegment>) -> Self {
        Self::new(value)
    }
}

impl<S: Into<NameSegment>> FromIterator<S> for NamePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Coerce an optional name into a path; `None` yields the empty path
pub fn to_name_path<N: Into<NamePath>>(name: Option<N>) -> NamePath {
    name.map(Into::into).unwrap_or_default()
}

/// Element id for `name` inside a form called `form_name`
pub fn field_id(name: &NamePath, form_name: Option<&str>) -> Option<String> {
    name.field_id(form_name)
}
