use crate::prelude::{println, *};
use colored::Colorize;
use textkit_core::catalog::{find_tool, ToolInfo, TOOLS};

#[derive(Debug, clap::Parser)]
#[command(name = "tools")]
#[command(about = "List the available tools")]
pub struct App {
    /// Show a single tool by command name or slug
    slug: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let tools: Vec<&ToolInfo> = match &app.slug {
        Some(slug) => vec![find_tool(slug).ok_or_else(|| Error::ToolNotFound(slug.clone()))?],
        None => TOOLS.iter().collect(),
    };

    if app.json {
        return print_json(&tools);
    }

    if is_tty() {
        banner("TEXTKIT TOOLS");
        println!();
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Command".bold(),
        "Name".bold(),
        "Category".bold(),
        "Description".bold()
    ]);
    for tool in tools {
        table.add_row(prettytable::row![
            tool.command.green(),
            tool.name,
            tool.category.cyan(),
            tool.description
        ]);
    }
    table.printstd();

    Ok(())
}
