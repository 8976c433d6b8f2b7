//! Extraction output records
//!
//! An [`ApiBean`] describes one discovered API-bearing class; each of its
//! [`ApiDefinition`]s describes one externally invokable method. The records
//! carry the original annotation instances alongside the normalized path and
//! properties, so downstream consumers needing richer detail keep access to
//! the raw metadata. Beans are mutated only during post-processing; once
//! handed to the registry client they are treated as immutable.

use crate::annotation::{Annotation, AnnotationKind, find_annotation};
use serde::{Deserialize, Serialize};

/// Insertion-ordered, additive string properties.
///
/// Inserting an existing key overwrites its value in place; other entries
/// are never cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    /// Create an empty property map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite a property
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a property value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One discovered API-bearing class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiBean {
    class_name: String,
    bean_path: String,
    annotations: Vec<Annotation>,
    properties: Properties,
    definitions: Vec<ApiDefinition>,
}

impl ApiBean {
    /// Create a raw bean for a class that passed the catalog membership test.
    /// The path and properties are filled in by post-processing.
    pub fn new(class_name: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        Self {
            class_name: class_name.into(),
            bean_path: String::new(),
            annotations,
            properties: Properties::new(),
            definitions: Vec::new(),
        }
    }

    /// Fully qualified class name
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Base path prefix for all definitions under this bean.
    /// Empty when no path-bearing annotation was found.
    pub fn bean_path(&self) -> &str {
        &self.bean_path
    }

    /// Rewrite the bean path
    pub fn set_bean_path(&mut self, path: impl Into<String>) {
        self.bean_path = path.into();
    }

    /// Look up the class-level annotation of the given kind
    pub fn annotation(&self, kind: &AnnotationKind) -> Option<&Annotation> {
        find_annotation(&self.annotations, kind)
    }

    /// All class-level annotations, in declaration order
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Add or overwrite a property
    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key, value);
    }

    /// Normalized properties
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Attach a definition to this bean
    pub fn add_definition(&mut self, definition: ApiDefinition) {
        self.definitions.push(definition);
    }

    /// Definitions owned by this bean
    pub fn definitions(&self) -> &[ApiDefinition] {
        &self.definitions
    }
}

/// One discovered endpoint (method) within an API bean
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDefinition {
    method_name: String,
    method_path: String,
    annotations: Vec<Annotation>,
    properties: Properties,
}

impl ApiDefinition {
    /// Create a raw definition for a method that passed the catalog
    /// membership test
    pub fn new(method_name: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        Self {
            method_name: method_name.into(),
            method_path: String::new(),
            annotations,
            properties: Properties::new(),
        }
    }

    /// Method name
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Method-level path fragment. The registry client combines it with the
    /// owning bean's path to form the full route.
    pub fn method_path(&self) -> &str {
        &self.method_path
    }

    /// Rewrite the method path
    pub fn set_method_path(&mut self, path: impl Into<String>) {
        self.method_path = path.into();
    }

    /// Look up the method-level annotation of the given kind
    pub fn annotation(&self, kind: &AnnotationKind) -> Option<&Annotation> {
        find_annotation(&self.annotations, kind)
    }

    /// All method-level annotations, in declaration order
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Add or overwrite a property
    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key, value);
    }

    /// Normalized properties
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}
