use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
  #[default]
  Json,
  Yaml,
}

impl DocumentFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }
}

/// Memory-maps a document file and parses it into a generic JSON value.
/// Schemas can live in any document, so no OpenAPI structure is imposed
/// here.
pub struct DocumentLoader {
  file: AsyncMmapFile,
  format: DocumentFormat,
}

impl DocumentLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(DocumentFormat::default(), DocumentFormat::from_extension);

    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file, format })
  }

  pub fn parse(&self) -> anyhow::Result<Value> {
    match self.format {
      DocumentFormat::Json => Ok(serde_json::from_slice(self.file.as_slice())?),
      DocumentFormat::Yaml => Ok(serde_yaml::from_slice(self.file.as_slice())?),
    }
  }
}
