//! HTTP controller variant extractor
//!
//! Recognizes the controller-marker / request-mapping annotation family: a
//! class carrying `Controller` or `RequestMapping` is an API bean, a method
//! carrying `RequestMapping` is an API definition. Path derivation is
//! first-alias-wins; `consumes` and `produces` are always recorded on
//! definitions, as comma-joined lists (empty string when undeclared).

use portico_core::{
    Annotation, AnnotationCatalog, AnnotationKind, ApiBean, ApiBeansExtractor, ApiDefinition,
    ExtractError, default_api_post_process, default_definition_post_process,
};
use tracing::debug;

/// Class-level controller marker kind
pub fn controller() -> AnnotationKind {
    AnnotationKind::new("Controller")
}

/// Route-mapping kind, valid at class and method level
pub fn request_mapping() -> AnnotationKind {
    AnnotationKind::new("RequestMapping")
}

const PATH_ATTR: &str = "path";
const CONSUMES_ATTR: &str = "consumes";
const PRODUCES_ATTR: &str = "produces";

/// API beans extractor for HTTP controller classes
pub struct HttpApiExtractor {
    catalog: AnnotationCatalog,
}

impl HttpApiExtractor {
    /// Create the extractor with its default annotation catalog
    pub fn new() -> Self {
        let mut catalog = AnnotationCatalog::new();

        // Annotations supported at class level
        catalog.add_api_annotation(controller());
        catalog.add_api_annotation(request_mapping());

        // Annotations supported at method level
        catalog.add_api_definition_annotation(request_mapping());

        Self { catalog }
    }

    /// Recognize an additional class-level annotation kind
    pub fn add_api_annotation(&mut self, kind: impl Into<AnnotationKind>) {
        self.catalog.add_api_annotation(kind);
    }

    /// Recognize an additional method-level annotation kind
    pub fn add_api_definition_annotation(&mut self, kind: impl Into<AnnotationKind>) {
        self.catalog.add_api_definition_annotation(kind);
    }

    /// First declared path alias, or empty when the mapping declares none
    fn get_path(mapping: &Annotation) -> String {
        mapping.first(PATH_ATTR).unwrap_or_default().to_string()
    }

    fn joined(mapping: &Annotation, attr: &str) -> String {
        mapping.values(attr).join(",")
    }
}

impl Default for HttpApiExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiBeansExtractor for HttpApiExtractor {
    fn client_name(&self) -> &str {
        "http"
    }

    fn catalog(&self) -> &AnnotationCatalog {
        &self.catalog
    }

    fn api_post_process(&self, bean: &mut ApiBean) -> Result<(), ExtractError> {
        let mapping = bean.annotation(&request_mapping()).cloned();

        // A controller without a class-level mapping still registers,
        // rooted at the empty path
        let bean_path = mapping.as_ref().map(Self::get_path).unwrap_or_default();
        bean.set_bean_path(bean_path);

        if let Some(mapping) = &mapping {
            bean.add_property(CONSUMES_ATTR, Self::joined(mapping, CONSUMES_ATTR));
            bean.add_property(PRODUCES_ATTR, Self::joined(mapping, PRODUCES_ATTR));
        }

        debug!(
            class = bean.class_name(),
            path = bean.bean_path(),
            "resolved bean path"
        );

        // Layer generic values on top
        default_api_post_process(bean)
    }

    fn definition_post_process(&self, definition: &mut ApiDefinition) -> Result<(), ExtractError> {
        // The catalog membership check upstream guarantees the mapping in
        // the intended call order; fail explicitly if a caller skipped it
        let mapping = definition.annotation(&request_mapping()).cloned().ok_or_else(|| {
            ExtractError::MissingDefinitionAnnotation {
                kind: request_mapping().to_string(),
                method: definition.method_name().to_string(),
            }
        })?;

        definition.set_method_path(Self::get_path(&mapping));
        definition.add_property(CONSUMES_ATTR, Self::joined(&mapping, CONSUMES_ATTR));
        definition.add_property(PRODUCES_ATTR, Self::joined(&mapping, PRODUCES_ATTR));

        // Layer generic values on top
        default_definition_post_process(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_core::{ClassMetadata, MethodMetadata};

    #[test]
    fn test_get_path_first_alias_wins() {
        let mapping = Annotation::new(request_mapping()).with_attr(PATH_ATTR, ["/a", "/b"]);
        assert_eq!(HttpApiExtractor::get_path(&mapping), "/a");
    }

    #[test]
    fn test_get_path_empty_when_undeclared() {
        let mapping = Annotation::new(request_mapping());
        assert_eq!(HttpApiExtractor::get_path(&mapping), "");
    }

    #[test]
    fn test_bean_without_mapping_gets_empty_path() {
        let extractor = HttpApiExtractor::new();
        let class = ClassMetadata::new("com.example.BareController")
            .with_annotation(Annotation::new(controller()));

        let bean = extractor.extract(&class).unwrap().unwrap();
        assert_eq!(bean.bean_path(), "");
        // No mapping, no consumes/produces at bean level
        assert!(bean.properties().get(CONSUMES_ATTR).is_none());
    }

    #[test]
    fn test_definition_without_mapping_is_an_error() {
        let extractor = HttpApiExtractor::new();
        let mut definition = ApiDefinition::new("orphan", vec![]);

        let result = extractor.definition_post_process(&mut definition);
        assert!(matches!(
            result,
            Err(ExtractError::MissingDefinitionAnnotation { method, .. }) if method == "orphan"
        ));
    }

    #[test]
    fn test_catalog_extension_accepts_new_kind() {
        let mut extractor = HttpApiExtractor::new();
        let class = ClassMetadata::new("com.example.RestEndpoint")
            .with_annotation(Annotation::new("RestController"));

        assert!(extractor.extract(&class).unwrap().is_none());

        extractor.add_api_annotation("RestController");
        assert!(extractor.extract(&class).unwrap().is_some());
    }

    #[test]
    fn test_method_kind_extension() {
        let mut extractor = HttpApiExtractor::new();
        extractor.add_api_definition_annotation("GetMapping");

        let class = ClassMetadata::new("com.example.OrderController")
            .with_annotation(Annotation::new(controller()))
            .with_method(
                MethodMetadata::new("getOrder")
                    .with_annotation(Annotation::new("GetMapping").with_attr(PATH_ATTR, ["/{id}"])),
            );

        // GetMapping qualifies the method now, but post-processing still
        // requires the request-mapping annotation itself
        let result = extractor.extract(&class);
        assert!(matches!(
            result,
            Err(ExtractError::MissingDefinitionAnnotation { .. })
        ));
    }
}
