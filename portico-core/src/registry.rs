//! Dispatch registry of extractor variants
//!
//! The host registers one extractor per client name at startup, then selects
//! the right variant for each discovered class by its routing key. Catalogs
//! are finalized before extraction begins, so the registry takes no locks.

use crate::error::ExtractError;
use crate::extractor::ApiBeansExtractor;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of extractor variants keyed by their stable client name
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn ApiBeansExtractor + Send + Sync>>,
}

impl ExtractorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extractor under its client name
    pub fn register(
        &mut self,
        extractor: Arc<dyn ApiBeansExtractor + Send + Sync>,
    ) -> Result<(), ExtractError> {
        let name = extractor.client_name().to_string();
        if self.extractors.contains_key(&name) {
            return Err(ExtractError::DuplicateClientName(name));
        }
        debug!(client = %name, "registered api beans extractor");
        self.extractors.insert(name, extractor);
        Ok(())
    }

    /// Look up the extractor for a client name
    pub fn get(&self, client_name: &str) -> Option<&Arc<dyn ApiBeansExtractor + Send + Sync>> {
        self.extractors.get(client_name)
    }

    /// All registered client names, sorted
    pub fn client_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.extractors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered extractors
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AnnotationCatalog;

    struct NamedExtractor {
        name: &'static str,
        catalog: AnnotationCatalog,
    }

    impl NamedExtractor {
        fn new(name: &'static str) -> Self {
            let mut catalog = AnnotationCatalog::new();
            catalog.add_api_annotation("Endpoint");
            Self { name, catalog }
        }
    }

    impl ApiBeansExtractor for NamedExtractor {
        fn client_name(&self) -> &str {
            self.name
        }
        fn catalog(&self) -> &AnnotationCatalog {
            &self.catalog
        }
    }

    #[test]
    fn test_register_and_dispatch() {
        let mut registry = ExtractorRegistry::new();
        registry.register(Arc::new(NamedExtractor::new("http"))).unwrap();
        registry.register(Arc::new(NamedExtractor::new("grpc"))).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.client_names(), ["grpc", "http"]);
        assert!(registry.get("http").is_some());
        assert!(registry.get("dubbo").is_none());
    }

    #[test]
    fn test_duplicate_client_name_rejected() {
        let mut registry = ExtractorRegistry::new();
        registry.register(Arc::new(NamedExtractor::new("http"))).unwrap();

        let result = registry.register(Arc::new(NamedExtractor::new("http")));
        assert!(matches!(
            result,
            Err(ExtractError::DuplicateClientName(name)) if name == "http"
        ));
        assert_eq!(registry.len(), 1);
    }
}
