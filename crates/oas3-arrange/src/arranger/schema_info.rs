use std::{collections::BTreeMap, fmt};

use serde_json::Value;

/// One named schema: its reference, local name, raw definition, and the
/// references it makes to other schemas. Built once per schema at
/// [`Orderer`](super::Orderer) construction and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaInfo {
  schema_ref: String,
  name: String,
  schema: Value,
  direct_refs: BTreeMap<String, bool>,
}

impl SchemaInfo {
  pub fn new(schema_ref: impl Into<String>, name: impl Into<String>, schema: Value) -> Self {
    let mut direct_refs = BTreeMap::new();
    Self::gather_refs(&mut direct_refs, &schema);
    Self {
      schema_ref: schema_ref.into(),
      name: name.into(),
      schema,
      direct_refs,
    }
  }

  /// Globally unique reference, container path plus local name.
  pub fn schema_ref(&self) -> &str {
    &self.schema_ref
  }

  /// Local name within the schema container.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// The raw definition, passed through untouched.
  pub fn schema(&self) -> &Value {
    &self.schema
  }

  /// Directly referenced `$ref` strings mapped to whether the reference is
  /// required.
  pub fn direct_refs(&self) -> &BTreeMap<String, bool> {
    &self.direct_refs
  }

  /// Whether this schema references `target` and requires it.
  pub(crate) fn requires(&self, target: &str) -> bool {
    self.direct_refs.get(target).copied().unwrap_or(false)
  }

  /// Adds every `$ref` found in the combinator branches with the given
  /// required state. An already required reference never downgrades to
  /// optional. Branches without a string `$ref` contribute nothing.
  pub(crate) fn gather_array_refs(refs: &mut BTreeMap<String, bool>, items: &[Value], required: bool) {
    for sub_schema in items {
      let Some(target) = sub_schema.get("$ref").and_then(Value::as_str) else {
        continue;
      };
      let entry = refs.entry(target.to_string()).or_insert(false);
      *entry = *entry || required;
    }
  }

  /// Extracts the outgoing references of a schema definition.
  ///
  /// Exactly one rule applies: `allOf` branches are required (AND), else
  /// `anyOf` branches are optional (OR), else `oneOf` branches are optional
  /// too (exclusivity between branches is not verified here), else each
  /// property `$ref` is required when the property name appears in the
  /// schema's `required` list. Assumes referenced schemas are named, not
  /// in-lined.
  pub(crate) fn gather_refs(refs: &mut BTreeMap<String, bool>, schema: &Value) {
    if let Some(items) = schema.get("allOf").and_then(Value::as_array) {
      return Self::gather_array_refs(refs, items, true);
    }
    let items = schema
      .get("anyOf")
      .and_then(Value::as_array)
      .or_else(|| schema.get("oneOf").and_then(Value::as_array));
    if let Some(items) = items {
      return Self::gather_array_refs(refs, items, false);
    }
    // Defaults below handle it if "type" is not "object".
    let required_names: Vec<&str> = schema
      .get("required")
      .and_then(Value::as_array)
      .map(|names| names.iter().filter_map(Value::as_str).collect())
      .unwrap_or_default();
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
      return;
    };
    for (property_name, property_schema) in properties {
      let Some(target) = property_schema.get("$ref").and_then(Value::as_str) else {
        continue;
      };
      let entry = refs.entry(target.to_string()).or_insert(false);
      *entry = *entry || required_names.contains(&property_name.as_str());
    }
  }
}

impl fmt::Display for SchemaInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let refs: Vec<String> = self
      .direct_refs
      .iter()
      .map(|(target, required)| format!("{target}:{}", if *required { "req" } else { "opt" }))
      .collect();
    write!(f, "{}: {}", self.schema_ref, refs.join(" "))
  }
}
