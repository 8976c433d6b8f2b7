//! Opaque annotation model shared by scanner input and extraction output

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier for a category of declarative metadata attached to a class
/// or method (an "annotation kind").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationKind(String);

impl AnnotationKind {
    /// Create a new annotation kind
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The kind identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnnotationKind {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for AnnotationKind {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One annotation instance: a kind plus named attributes.
///
/// Attributes are opaque lists of strings as supplied by the scanning
/// collaborator; single-valued attributes are one-element lists. Declaration
/// order of list elements is preserved (path-alias selection depends on it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    kind: AnnotationKind,
    attributes: HashMap<String, Vec<String>>,
}

impl Annotation {
    /// Create a new annotation with no attributes
    pub fn new(kind: impl Into<AnnotationKind>) -> Self {
        Self {
            kind: kind.into(),
            attributes: HashMap::new(),
        }
    }

    /// Set a named attribute
    pub fn with_attr<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attributes
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// The kind of this annotation
    pub fn kind(&self) -> &AnnotationKind {
        &self.kind
    }

    /// All declared values of an attribute, empty when the attribute is absent
    pub fn values(&self, name: &str) -> &[String] {
        self.attributes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First declared value of an attribute
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }
}

/// Find the annotation of the given kind in a declaration-ordered slice.
///
/// At most one instance per kind is expected; the first match wins.
pub fn find_annotation<'a>(
    annotations: &'a [Annotation],
    kind: &AnnotationKind,
) -> Option<&'a Annotation> {
    annotations.iter().find(|a| a.kind() == kind)
}
