use clap::Parser;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::Arrange(command) => ui::commands::arrange_schemas(&command, &colors).await?,
    Commands::List { list_command } => match list_command {
      ListCommands::Refs { input, path } => ui::commands::list_refs(&input, path.as_deref(), &colors).await?,
    },
  }

  Ok(())
}
