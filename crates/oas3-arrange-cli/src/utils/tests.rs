use std::io::Write;

use tempfile::Builder;

use super::document::{DocumentFormat, DocumentLoader};

#[test]
fn test_format_from_extension() {
  assert_eq!(DocumentFormat::from_extension("yaml"), DocumentFormat::Yaml);
  assert_eq!(DocumentFormat::from_extension("yml"), DocumentFormat::Yaml);
  assert_eq!(DocumentFormat::from_extension("json"), DocumentFormat::Json);
  assert_eq!(DocumentFormat::from_extension("txt"), DocumentFormat::Json);
}

#[tokio::test]
async fn test_load_json_document() {
  let mut file = Builder::new().suffix(".json").tempfile().unwrap();
  write!(file, r#"{{"components": {{"schemas": {{"Solo": {{"type": "object"}}}}}}}}"#).unwrap();
  file.flush().unwrap();

  let doc = DocumentLoader::open(file.path()).await.unwrap().parse().unwrap();
  assert_eq!(doc["components"]["schemas"]["Solo"]["type"], "object");
}

#[tokio::test]
async fn test_load_yaml_document() {
  let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
  write!(
    file,
    "components:\n  schemas:\n    Solo:\n      type: object\n"
  )
  .unwrap();
  file.flush().unwrap();

  let doc = DocumentLoader::open(file.path()).await.unwrap().parse().unwrap();
  assert_eq!(doc["components"]["schemas"]["Solo"]["type"], "object");
}

#[tokio::test]
async fn test_missing_file_errors() {
  let result = DocumentLoader::open("no-such-document.json".as_ref()).await;
  assert!(result.is_err(), "open: expected missing file to fail");
}
