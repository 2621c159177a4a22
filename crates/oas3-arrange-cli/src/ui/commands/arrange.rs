use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use crossterm::style::Stylize;
use oas3_arrange::{ArrangeError, ArrangedSchema, arrange};

use crate::{
  ui::{ArrangeCommand, Colors, OutputFormat, colors::comfy, term_width},
  utils::DocumentLoader,
};

pub async fn arrange_schemas(command: &ArrangeCommand, colors: &Colors) -> anyhow::Result<()> {
  let doc = DocumentLoader::open(&command.input).await?.parse()?;

  let order = match arrange(&doc, command.path.as_deref(), command.sort_strategy()) {
    Ok(order) => order,
    Err(err @ ArrangeError::SchemasNotFound { .. }) => {
      // Nothing to order, not a failure.
      println!("{}", err.to_string().with(colors.accent()));
      return Ok(());
    }
    Err(err) => return Err(err.into()),
  };

  match command.format {
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&order)?),
    OutputFormat::Table => print_order(&order, colors),
  }

  Ok(())
}

fn format_refs(entry: &ArrangedSchema) -> String {
  entry
    .direct_refs
    .iter()
    .map(|(target, required)| format!("{target}:{}", if *required { "req" } else { "opt" }))
    .collect::<Vec<_>>()
    .join(" ")
}

fn print_order(order: &[ArrangedSchema], colors: &Colors) {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("#").fg(comfy(colors.label())));
  header.add_cell(Cell::new("SCHEMA").fg(comfy(colors.label())));
  header.add_cell(Cell::new("REFERENCES").fg(comfy(colors.label())));
  header.add_cell(Cell::new("FORWARD").fg(comfy(colors.label())));
  table.set_header(header);

  let mut forward_total = 0usize;
  let mut forward_required = 0usize;
  for (position, entry) in order.iter().enumerate() {
    forward_total += entry.unseen_refs.len();
    forward_required += entry
      .unseen_refs
      .iter()
      .filter(|target| entry.direct_refs.get(target.as_str()) == Some(&true))
      .count();

    let forward = entry.unseen_refs.iter().cloned().collect::<Vec<_>>().join(" ");
    let mut row = Row::new();
    row.add_cell(
      Cell::new(position + 1)
        .fg(comfy(colors.muted()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(&entry.name)
        .fg(comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(format_refs(entry)).fg(comfy(colors.muted())));
    row.add_cell(Cell::new(forward).fg(comfy(colors.accent())));
    table.add_row(row);
  }

  println!("{table}");
  println!(
    "{}",
    format!(
      "{} schemas, {forward_total} forward references ({forward_required} required)",
      order.len()
    )
    .with(colors.label())
  );
}
