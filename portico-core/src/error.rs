// Error types for extraction and extractor dispatch

use thiserror::Error;

/// Extraction errors
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A definition-level hook ran on a method that lacks its qualifying
    /// annotation. This signals a caller-ordering bug: the catalog membership
    /// check must run before definition post-processing.
    #[error("method '{method}' is missing required annotation '{kind}'")]
    MissingDefinitionAnnotation {
        /// The annotation kind that was expected
        kind: String,
        /// The method being post-processed
        method: String,
    },

    #[error("extractor '{0}' declares no class-level annotation kinds")]
    EmptyCatalog(String),

    #[error("extractor already registered for client name '{0}'")]
    DuplicateClientName(String),
}
