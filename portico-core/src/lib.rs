// Core library for the Portico gateway client
// This crate contains the annotation model, catalogs, api bean records,
// and the extraction skeleton shared by all variant extractors

pub mod annotation;
pub mod bean;
pub mod catalog;
pub mod error;
pub mod extractor;
pub mod metadata;
pub mod registry;

// Re-export commonly used types
pub use annotation::*;
pub use bean::*;
pub use catalog::*;
pub use error::*;
pub use extractor::*;
pub use metadata::*;
pub use registry::*;
