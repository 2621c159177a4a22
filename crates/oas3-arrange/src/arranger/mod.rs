mod errors;
mod locator;
mod orderer;
mod schema_info;

pub use errors::ArrangeError;
pub use locator::{SchemaLocation, locate_schemas};
pub use orderer::{ArrangedSchema, Orderer, SortStrategy};
pub use schema_info::SchemaInfo;

#[cfg(test)]
mod tests;

use serde_json::Value;

/// Arranges the document's schemas in alphabetical name order.
///
/// `path` locates the schema container; when omitted, `#/components/schemas`
/// and `#/$defs` are tried in that order.
pub fn alphabetical(doc: &Value, path: Option<&str>) -> Result<Vec<ArrangedSchema>, ArrangeError> {
  arrange(doc, path, SortStrategy::Alphabetical)
}

/// Arranges the document's schemas to minimize forward declarations.
pub fn dependencies_first(doc: &Value, path: Option<&str>) -> Result<Vec<ArrangedSchema>, ArrangeError> {
  arrange(doc, path, SortStrategy::DependenciesFirst)
}

/// Locates the schema container and produces the arrangement for the given
/// strategy.
pub fn arrange(doc: &Value, path: Option<&str>, strategy: SortStrategy) -> Result<Vec<ArrangedSchema>, ArrangeError> {
  let location = locate_schemas(doc, path)?;
  let mut orderer = Orderer::new(&location.path, location.schemas);
  orderer.sort(strategy)?;
  Ok(orderer.into_order())
}
