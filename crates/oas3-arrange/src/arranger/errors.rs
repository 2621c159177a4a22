use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrangeError {
  /// No schema container resolved: either the given path did not lead to a
  /// mapping, or none of the default candidate locations held a non-empty
  /// one. Distinct from a container that exists but has no entries, which
  /// arranges to an empty order.
  #[error("no schemas found{}", .path.as_deref().map_or_else(String::new, |p| format!(" at {p}")))]
  SchemasNotFound { path: Option<String> },

  /// A custom sort key did not resolve to a stored attribute or query.
  /// This is a caller programming error, not a data error.
  #[error("{key} is neither a stored attribute nor a query of {type_name}")]
  UnknownSortKey { key: String, type_name: &'static str },
}
