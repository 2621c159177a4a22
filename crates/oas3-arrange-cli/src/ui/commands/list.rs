use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use crossterm::style::Stylize;
use oas3_arrange::{Orderer, locate_schemas};

use crate::{
  ui::{Colors, colors::comfy, term_width},
  utils::DocumentLoader,
};

/// Prints each schema's direct references, req/opt labeled, in document
/// order.
pub async fn list_refs(input: &Path, path: Option<&str>, colors: &Colors) -> anyhow::Result<()> {
  let doc = DocumentLoader::open(input).await?.parse()?;

  let location = match locate_schemas(&doc, path) {
    Ok(location) => location,
    Err(err) => {
      println!("{}", err.to_string().with(colors.accent()));
      return Ok(());
    }
  };

  let orderer = Orderer::new(&location.path, location.schemas);

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("SCHEMA").fg(comfy(colors.label())));
  header.add_cell(Cell::new("REFERENCES").fg(comfy(colors.label())));
  table.set_header(header);

  for info in orderer.schemas().values() {
    let refs = info
      .direct_refs()
      .iter()
      .map(|(target, required)| format!("{target}:{}", if *required { "req" } else { "opt" }))
      .collect::<Vec<_>>()
      .join(" ");
    let mut row = Row::new();
    row.add_cell(
      Cell::new(info.name())
        .fg(comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(refs).fg(comfy(colors.muted())));
    table.add_row(row);
  }

  println!("{table}");
  println!(
    "{}",
    format!("{} schemas at {}", orderer.schemas().len(), location.path).with(colors.label())
  );

  Ok(())
}
