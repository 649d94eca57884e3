use crate::input::InputArgs;
use crate::prelude::{println, *};
use colored::Colorize;
use textkit_core::stats::{format_report, text_stats, TextStats};

#[derive(Debug, clap::Parser)]
#[command(name = "count")]
#[command(about = "Count words, characters, sentences and paragraphs")]
pub struct App {
    #[clap(flatten)]
    input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the statistics report to the clipboard
    #[arg(long)]
    copy: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let text = app.input.read()?;
    let stats = text_stats(&text);

    if app.json {
        print_json(&stats)?;
    } else {
        output_formatted(&stats);
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&format_report(&stats));
    }

    Ok(())
}

fn output_formatted(stats: &TextStats) {
    if !is_tty() {
        println!("{}", format_report(stats));
        return;
    }

    banner("TEXT STATISTICS");
    println!();

    let minutes = if stats.reading_time_minutes == 1 {
        "1 minute".to_string()
    } else {
        f!("{} minutes", stats.reading_time_minutes)
    };

    let mut table = new_table();
    table.add_row(prettytable::row!["Words".green(), stats.words]);
    table.add_row(prettytable::row!["Characters".green(), stats.characters]);
    table.add_row(prettytable::row![
        "Characters (no spaces)".green(),
        stats.characters_no_spaces
    ]);
    table.add_row(prettytable::row!["Sentences".green(), stats.sentences]);
    table.add_row(prettytable::row!["Paragraphs".green(), stats.paragraphs]);
    table.add_row(prettytable::row!["Reading time".green(), minutes]);
    table.printstd();
}
