//! Input contract from the class-scanning collaborator
//!
//! The scanner enumerates candidate classes and hands this crate their
//! already-resident reflective metadata: per class, the declaration-ordered
//! annotations at class granularity, and the same per method. How that
//! metadata is obtained is the scanner's concern.

use crate::annotation::{Annotation, AnnotationKind, find_annotation};
use serde::{Deserialize, Serialize};

/// Reflective metadata for one candidate class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMetadata {
    /// Fully qualified class name
    pub class_name: String,

    /// Class-level annotations, in declaration order
    pub annotations: Vec<Annotation>,

    /// Methods of the class
    pub methods: Vec<MethodMetadata>,
}

impl ClassMetadata {
    /// Create metadata for a class with no annotations or methods
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            annotations: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add a class-level annotation
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a method
    pub fn with_method(mut self, method: MethodMetadata) -> Self {
        self.methods.push(method);
        self
    }

    /// Look up the class-level annotation of the given kind
    pub fn annotation(&self, kind: &AnnotationKind) -> Option<&Annotation> {
        find_annotation(&self.annotations, kind)
    }
}

/// Reflective metadata for one method of a candidate class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodMetadata {
    /// Method name
    pub method_name: String,

    /// Method-level annotations, in declaration order
    pub annotations: Vec<Annotation>,
}

impl MethodMetadata {
    /// Create metadata for a method with no annotations
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            annotations: Vec::new(),
        }
    }

    /// Add a method-level annotation
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Look up the method-level annotation of the given kind
    pub fn annotation(&self, kind: &AnnotationKind) -> Option<&Annotation> {
        find_annotation(&self.annotations, kind)
    }
}
