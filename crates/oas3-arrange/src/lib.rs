//! Orders the named schema definitions of an OpenAPI or JSON Schema document
//! into a linear sequence suited for source-code generation.
//!
//! Code generators that emit one type per schema want referenced types
//! declared before their referents. Cross-references make a perfect such
//! order impossible in general, so the [`arranger::Orderer`] either sorts
//! alphabetically or greedily minimizes the number and severity of forward
//! references, and afterwards reports per entry which references remain
//! unsatisfied at its position in the order.

pub mod arranger;

pub use arranger::{
  ArrangeError, ArrangedSchema, Orderer, SchemaInfo, SchemaLocation, SortStrategy, alphabetical, arrange,
  dependencies_first, locate_schemas,
};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name and version joined by the given separator, e.g. `oas3-arrange: 0.1.0`.
#[must_use]
pub fn info(separator: &str) -> String {
  format!("{NAME}{separator}{VERSION}")
}
