use serde_json::{Map, Value};

use super::errors::ArrangeError;

/// A schema container found within a document, paired with the path string
/// that located it. The path becomes the prefix of every schema reference
/// built from the container.
#[derive(Debug)]
pub struct SchemaLocation<'a> {
  pub path: String,
  pub schemas: &'a Map<String, Value>,
}

/// One location to probe: the path string as reported back to the caller and
/// the segments used to navigate the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathCandidate {
  pub(crate) path: String,
  pub(crate) segments: Vec<String>,
}

impl PathCandidate {
  fn new(path: &str, segments: &[&str]) -> Self {
    Self {
      path: path.to_string(),
      segments: segments.iter().map(ToString::to_string).collect(),
    }
  }
}

/// Candidate locations for the schema container. Without a path the OpenAPI
/// location is tried before the JSON Schema one. A given path produces a
/// single candidate: split on `/`, empty segments dropped (so doubled
/// separators are tolerated), a leading `#` dropped.
pub(crate) fn path_candidates(path: Option<&str>) -> Vec<PathCandidate> {
  let Some(path) = path else {
    return vec![
      PathCandidate::new("#/components/schemas/", &["components", "schemas"]),
      PathCandidate::new("#/$defs/", &["$defs"]),
    ];
  };
  let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
  let segments = match segments.first() {
    Some(&"#") => &segments[1..],
    _ => &segments[..],
  };
  vec![PathCandidate::new(path, segments)]
}

/// Navigates nested mappings along the segments. Empty segments address the
/// document itself.
pub(crate) fn dig<'a>(doc: &'a Value, segments: &[String]) -> Option<&'a Value> {
  let mut current = doc;
  for segment in segments {
    current = current.get(segment)?;
  }
  Some(current)
}

/// Locates the schema-name to definition mapping within the document.
///
/// With no path, the first default candidate holding a non-empty mapping
/// wins. With an explicit path, the resolved mapping is returned even when
/// empty; only a failed navigation is an error. Absence is thereby reported
/// distinctly from an empty-but-present container.
pub fn locate_schemas<'a>(doc: &'a Value, path: Option<&str>) -> Result<SchemaLocation<'a>, ArrangeError> {
  let explicit = path.is_some();
  for candidate in path_candidates(path) {
    let Some(schemas) = dig(doc, &candidate.segments).and_then(Value::as_object) else {
      continue;
    };
    if explicit || !schemas.is_empty() {
      return Ok(SchemaLocation {
        path: candidate.path,
        schemas,
      });
    }
  }
  Err(ArrangeError::SchemasNotFound {
    path: path.map(ToString::to_string),
  })
}
