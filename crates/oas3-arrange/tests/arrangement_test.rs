use oas3_arrange::{ArrangeError, SortStrategy, alphabetical, arrange, dependencies_first};
use serde_json::{Value, json};

fn yaml(text: &str) -> Value {
  serde_yaml::from_str(text).expect("fixture should parse")
}

#[test]
fn alphabetical_end_to_end() {
  let doc = json!({
    "components": {
      "schemas": {
        "Solo": {"foo": "bar"},
        "RefSolo": {"properties": {"foo": {"$ref": "Solo"}}, "required": []}
      }
    }
  });
  let order = alphabetical(&doc, None).expect("container should be found");
  let names: Vec<&str> = order.iter().map(|entry| entry.name.as_str()).collect();
  assert_eq!(names, ["RefSolo", "Solo"], "ascending name order");
  assert!(
    order[0].unseen_refs.contains("Solo"),
    "RefSolo is emitted before its target"
  );
  assert!(order[1].unseen_refs.is_empty());
}

#[test]
fn dependencies_first_end_to_end() {
  let doc = json!({
    "components": {
      "schemas": {
        "Solo": {"foo": "bar"},
        "RefSolo": {"properties": {"foo": {"$ref": "Solo"}}, "required": []}
      }
    }
  });
  let order = dependencies_first(&doc, None).expect("container should be found");
  let names: Vec<&str> = order.iter().map(|entry| entry.name.as_str()).collect();
  assert_eq!(names, ["Solo", "RefSolo"], "dependency emitted first");
  assert!(order.iter().all(|entry| entry.unseen_refs.is_empty()));
}

#[test]
fn arrangement_is_a_permutation() {
  let doc = yaml(
    "
$defs:
  Node:
    properties:
      next:
        $ref: Node
      payload:
        $ref: Payload
    required:
    - payload
  Payload:
    type: object
  Wrapper:
    allOf:
    - $ref: Node
",
  );
  let order = dependencies_first(&doc, None).expect("container should be found");
  let mut names: Vec<&str> = order.iter().map(|entry| entry.name.as_str()).collect();
  names.sort_unstable();
  assert_eq!(names, ["Node", "Payload", "Wrapper"], "no omissions, no duplicates");
  for entry in &order {
    assert_eq!(entry.schema_ref, format!("#/$defs/{}", entry.name));
    for target in &entry.unseen_refs {
      assert!(entry.direct_refs.contains_key(target), "unseen is a subset of direct");
    }
  }
}

#[test]
fn explicit_path_selects_container() {
  let doc = yaml(
    "
components:
  schemas:
    Ignored: {}
custom:
  types:
    Used:
      type: object
",
  );
  let order = arrange(&doc, Some("#/custom/types"), SortStrategy::DependenciesFirst).expect("path should resolve");
  assert_eq!(order.len(), 1);
  assert_eq!(order[0].name, "Used");
  assert_eq!(order[0].schema_ref, "#/custom/types/Used");
}

#[test]
fn missing_container_is_reported() {
  let doc = json!({"paths": {}});
  let err = dependencies_first(&doc, None).expect_err("nothing to order");
  assert!(matches!(err, ArrangeError::SchemasNotFound { path: None }));

  let err = arrange(&doc, Some("#/nowhere"), SortStrategy::Alphabetical).expect_err("bad path");
  assert!(matches!(err, ArrangeError::SchemasNotFound { path: Some(_) }));
}

#[test]
fn empty_container_orders_nothing() {
  let doc = json!({"components": {"schemas": {}}});
  let order = arrange(&doc, Some("#/components/schemas"), SortStrategy::DependenciesFirst)
    .expect("found but empty is not an error");
  assert!(order.is_empty());
}

#[test]
fn arranged_entries_serialize_for_consumers() {
  let doc = json!({
    "components": {
      "schemas": {
        "Pet": {"properties": {"owner": {"$ref": "Owner"}}, "required": ["owner"]},
        "Owner": {"type": "object"}
      }
    }
  });
  let order = dependencies_first(&doc, None).expect("container should be found");
  let serialized = serde_json::to_value(&order).expect("order serializes");
  assert_eq!(serialized[0]["name"], "Owner");
  assert_eq!(serialized[1]["ref"], "#/components/schemas/Pet");
  assert_eq!(serialized[1]["direct_refs"]["Owner"], true);
  assert_eq!(serialized[1]["schema"]["required"][0], "owner");
}
