//! Per-variant annotation catalogs
//!
//! A catalog answers, for one extractor variant, which annotation kinds make
//! a class an API bean and which make a method an API definition. Catalogs
//! only grow: variants are composed by adding kinds, never by removing
//! inherited ones. Duplicate registrations are tolerated; membership is a
//! set test, so the lists' order carries no meaning.

use crate::annotation::AnnotationKind;
use crate::metadata::{ClassMetadata, MethodMetadata};

/// Annotation kinds recognized by one extractor variant
#[derive(Debug, Clone, Default)]
pub struct AnnotationCatalog {
    api_annotations: Vec<AnnotationKind>,
    api_definition_annotations: Vec<AnnotationKind>,
}

impl AnnotationCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotation kinds that qualify a class as an API bean
    pub fn api_annotations(&self) -> &[AnnotationKind] {
        &self.api_annotations
    }

    /// Annotation kinds that qualify a method as an API definition
    pub fn api_definition_annotations(&self) -> &[AnnotationKind] {
        &self.api_definition_annotations
    }

    /// Register an additional class-level annotation kind
    pub fn add_api_annotation(&mut self, kind: impl Into<AnnotationKind>) {
        self.api_annotations.push(kind.into());
    }

    /// Register an additional method-level annotation kind
    pub fn add_api_definition_annotation(&mut self, kind: impl Into<AnnotationKind>) {
        self.api_definition_annotations.push(kind.into());
    }

    /// Whether the class carries at least one qualifying annotation
    pub fn qualifies_class(&self, class: &ClassMetadata) -> bool {
        self.api_annotations
            .iter()
            .any(|kind| class.annotation(kind).is_some())
    }

    /// Whether the method carries at least one qualifying annotation
    pub fn qualifies_method(&self, method: &MethodMetadata) -> bool {
        self.api_definition_annotations
            .iter()
            .any(|kind| method.annotation(kind).is_some())
    }
}
