//! Extraction skeleton shared by all variant extractors
//!
//! The driver walks a candidate class with the variant's catalog, builds the
//! raw bean and definition records, then runs the variant's post-process
//! hooks to refine path and properties. Variants set their own fields first
//! and finish by calling the shared default step, so generic values layer on
//! top without overwriting what the variant already set.

use crate::annotation::AnnotationKind;
use crate::bean::{ApiBean, ApiDefinition};
use crate::catalog::AnnotationCatalog;
use crate::error::ExtractError;
use crate::metadata::ClassMetadata;
use tracing::debug;

/// Kind of the generic documentation annotation understood by every variant
pub fn api_doc() -> AnnotationKind {
    AnnotationKind::new("ApiDoc")
}

// Documentation attributes copied into properties by the default step
const DOC_ATTRS: [&str; 2] = ["desc", "tags"];

/// One extractor variant: a catalog of recognized annotation kinds plus
/// framework-specific path and property rules.
///
/// Extraction is a synchronous, pure transformation over already-resident
/// reflective metadata; implementations hold no shared mutable state and the
/// catalog must be finalized before the first call to [`extract`].
///
/// [`extract`]: ApiBeansExtractor::extract
pub trait ApiBeansExtractor {
    /// Stable identifier distinguishing this variant among all registered
    /// extractors. A routing key, not a display label; must not change
    /// across versions.
    fn client_name(&self) -> &str;

    /// The annotation kinds this variant recognizes
    fn catalog(&self) -> &AnnotationCatalog;

    /// Bean-level refinement hook, called once per discovered bean.
    ///
    /// Variants derive their framework-specific path and properties first
    /// and finish with [`default_api_post_process`].
    fn api_post_process(&self, bean: &mut ApiBean) -> Result<(), ExtractError> {
        default_api_post_process(bean)
    }

    /// Definition-level refinement hook, called once per discovered
    /// definition, before the owning bean's [`api_post_process`].
    ///
    /// Only invoked for methods that passed the catalog membership test, so
    /// the qualifying annotation is present in the intended call order.
    ///
    /// [`api_post_process`]: ApiBeansExtractor::api_post_process
    fn definition_post_process(&self, definition: &mut ApiDefinition) -> Result<(), ExtractError> {
        default_definition_post_process(definition)
    }

    /// Run extraction for one candidate class.
    ///
    /// Returns `Ok(None)` when the class carries none of the catalog's
    /// class-level kinds. A qualifying class with no qualifying methods
    /// still yields a bean; whether that is registrable is the registry
    /// client's call.
    fn extract(&self, class: &ClassMetadata) -> Result<Option<ApiBean>, ExtractError> {
        let catalog = self.catalog();
        if catalog.api_annotations().is_empty() {
            return Err(ExtractError::EmptyCatalog(self.client_name().to_string()));
        }

        if !catalog.qualifies_class(class) {
            debug!(
                class = %class.class_name,
                client = self.client_name(),
                "class does not qualify as an api bean"
            );
            return Ok(None);
        }

        let mut bean = ApiBean::new(&class.class_name, class.annotations.clone());

        for method in &class.methods {
            if !catalog.qualifies_method(method) {
                continue;
            }
            let mut definition =
                ApiDefinition::new(&method.method_name, method.annotations.clone());
            self.definition_post_process(&mut definition)?;
            bean.add_definition(definition);
        }

        self.api_post_process(&mut bean)?;

        debug!(
            class = %class.class_name,
            path = bean.bean_path(),
            definitions = bean.definitions().len(),
            "extracted api bean"
        );
        Ok(Some(bean))
    }

    /// Run extraction over a batch of candidate classes, keeping only the
    /// classes that qualify
    fn extract_all(&self, classes: &[ClassMetadata]) -> Result<Vec<ApiBean>, ExtractError> {
        let mut beans = Vec::new();
        for class in classes {
            if let Some(bean) = self.extract(class)? {
                beans.push(bean);
            }
        }
        Ok(beans)
    }
}

/// Shared bean-level post-process step.
///
/// Layers generic documentation values into the bean's properties, skipping
/// keys the variant already set.
pub fn default_api_post_process(bean: &mut ApiBean) -> Result<(), ExtractError> {
    let doc = bean.annotation(&api_doc()).cloned();
    if let Some(doc) = doc {
        for attr in DOC_ATTRS {
            if !bean.properties().contains_key(attr) {
                bean.add_property(attr, doc.values(attr).join(","));
            }
        }
    }
    Ok(())
}

/// Shared definition-level post-process step; same layering contract as
/// [`default_api_post_process`], at method granularity.
pub fn default_definition_post_process(definition: &mut ApiDefinition) -> Result<(), ExtractError> {
    let doc = definition.annotation(&api_doc()).cloned();
    if let Some(doc) = doc {
        for attr in DOC_ATTRS {
            if !definition.properties().contains_key(attr) {
                definition.add_property(attr, doc.values(attr).join(","));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use crate::metadata::MethodMetadata;

    // Minimal variant relying entirely on the default hooks
    struct BareExtractor {
        catalog: AnnotationCatalog,
    }

    impl BareExtractor {
        fn new() -> Self {
            let mut catalog = AnnotationCatalog::new();
            catalog.add_api_annotation("Endpoint");
            catalog.add_api_definition_annotation("Endpoint");
            Self { catalog }
        }
    }

    impl ApiBeansExtractor for BareExtractor {
        fn client_name(&self) -> &str {
            "bare"
        }

        fn catalog(&self) -> &AnnotationCatalog {
            &self.catalog
        }
    }

    #[test]
    fn test_non_qualifying_class_is_skipped() {
        let extractor = BareExtractor::new();
        let class = ClassMetadata::new("Plain").with_annotation(Annotation::new("Service"));

        assert!(extractor.extract(&class).unwrap().is_none());
    }

    #[test]
    fn test_qualifying_methods_become_definitions() {
        let extractor = BareExtractor::new();
        let class = ClassMetadata::new("Api")
            .with_annotation(Annotation::new("Endpoint"))
            .with_method(MethodMetadata::new("a").with_annotation(Annotation::new("Endpoint")))
            .with_method(MethodMetadata::new("helper"));

        let bean = extractor.extract(&class).unwrap().unwrap();
        assert_eq!(bean.definitions().len(), 1);
        assert_eq!(bean.definitions()[0].method_name(), "a");
    }

    #[test]
    fn test_empty_catalog_fails_fast() {
        struct Broken(AnnotationCatalog);
        impl ApiBeansExtractor for Broken {
            fn client_name(&self) -> &str {
                "broken"
            }
            fn catalog(&self) -> &AnnotationCatalog {
                &self.0
            }
        }

        let extractor = Broken(AnnotationCatalog::new());
        let class = ClassMetadata::new("Api");

        assert!(matches!(
            extractor.extract(&class),
            Err(ExtractError::EmptyCatalog(name)) if name == "broken"
        ));
    }

    #[test]
    fn test_default_step_layers_doc_values() {
        let mut bean = ApiBean::new(
            "Api",
            vec![
                Annotation::new("Endpoint"),
                Annotation::new("ApiDoc")
                    .with_attr("desc", ["order lookup"])
                    .with_attr("tags", ["orders", "v1"]),
            ],
        );
        bean.add_property("desc", "variant wins");

        default_api_post_process(&mut bean).unwrap();

        // Variant-set keys are never overwritten; missing ones are filled
        assert_eq!(bean.properties().get("desc"), Some("variant wins"));
        assert_eq!(bean.properties().get("tags"), Some("orders,v1"));
    }

    #[test]
    fn test_extract_all_filters_batch() {
        let extractor = BareExtractor::new();
        let classes = vec![
            ClassMetadata::new("A").with_annotation(Annotation::new("Endpoint")),
            ClassMetadata::new("B").with_annotation(Annotation::new("Service")),
            ClassMetadata::new("C").with_annotation(Annotation::new("Endpoint")),
        ];

        let beans = extractor.extract_all(&classes).unwrap();
        let names: Vec<&str> = beans.iter().map(|b| b.class_name()).collect();
        assert_eq!(names, ["A", "C"]);
    }
}
