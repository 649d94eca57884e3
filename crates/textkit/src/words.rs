use crate::prelude::{println, *};
use colored::Colorize;
use serde::Serialize;
use textkit_core::number_words::{convert_number, group_thousands};

#[derive(Debug, clap::Parser)]
#[command(name = "words")]
#[command(about = "Spell out a number in English words")]
pub struct App {
    /// Number to convert (commas, sign and decimals allowed)
    #[arg(allow_hyphen_values = true)]
    number: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the words to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Serialize)]
pub struct WordsOutput {
    pub input: String,
    pub formatted: String,
    pub words: String,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let words = convert_number(&app.number).map_err(|e| eyre!("{}", e))?;
    let output = WordsOutput {
        formatted: group_thousands(app.number.trim()),
        input: app.number,
        words,
    };

    if app.json {
        print_json(&output)?;
    } else if is_tty() {
        println!("{}: {}", "Number".green(), output.formatted.bright_yellow());
        println!("{}: {}", "Words".green(), output.words.bright_white().bold());
    } else {
        println!("{}", output.words);
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&output.words);
    }

    Ok(())
}
