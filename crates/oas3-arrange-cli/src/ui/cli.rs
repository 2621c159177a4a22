use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use oas3_arrange::SortStrategy;

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas3-arrange")]
#[command(author, version, about = "Arranges OpenAPI schemas into code generation order")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Arrange schemas into declaration order
  Arrange(ArrangeCommand),
  /// List information from the document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
}

#[derive(Args, Debug)]
pub struct ArrangeCommand {
  /// Path to the OpenAPI or JSON Schema document (JSON or YAML)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Location of the schema container, e.g. #/components/schemas
  /// (default: #/components/schemas, then #/$defs)
  #[arg(short, long, value_name = "POINTER")]
  pub path: Option<String>,

  /// Ordering strategy
  #[arg(short, long, value_enum, default_value = "dependencies-first")]
  pub strategy: StrategyArg,

  /// Sort by a named schema attribute instead of a built-in strategy
  #[arg(long, value_name = "KEY", conflicts_with = "strategy")]
  pub key: Option<String>,

  /// Output format
  #[arg(short, long, value_enum, default_value = "table")]
  pub format: OutputFormat,
}

impl ArrangeCommand {
  pub fn sort_strategy(&self) -> SortStrategy {
    if let Some(key) = &self.key {
      return SortStrategy::Key(key.clone());
    }
    match self.strategy {
      StrategyArg::DependenciesFirst => SortStrategy::DependenciesFirst,
      StrategyArg::Alphabetical => SortStrategy::Alphabetical,
    }
  }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StrategyArg {
  DependenciesFirst,
  Alphabetical,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
  Table,
  Json,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List each schema's direct references in document order
  Refs {
    /// Path to the OpenAPI or JSON Schema document (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Location of the schema container
    #[arg(short, long, value_name = "POINTER")]
    path: Option<String>,
  },
}
