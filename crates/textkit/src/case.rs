use crate::input::InputArgs;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use textkit_core::case::{convert_all, convert_case, CaseConversion};

#[derive(Debug, clap::Parser)]
#[command(name = "case")]
#[command(about = "Convert text between letter cases")]
pub struct App {
    #[clap(flatten)]
    input: InputArgs,

    /// Only print the text in this style
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the result to the clipboard (requires --style)
    #[arg(long, requires = "style")]
    copy: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// UPPER CASE
    Upper,
    /// lower case
    Lower,
    /// Title Case
    Title,
    /// Sentence case
    Sentence,
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// snake_case
    Snake,
    /// kebab-case
    Kebab,
}

impl From<CaseStyle> for textkit_core::case::CaseStyle {
    fn from(s: CaseStyle) -> Self {
        match s {
            CaseStyle::Upper => textkit_core::case::CaseStyle::Upper,
            CaseStyle::Lower => textkit_core::case::CaseStyle::Lower,
            CaseStyle::Title => textkit_core::case::CaseStyle::Title,
            CaseStyle::Sentence => textkit_core::case::CaseStyle::Sentence,
            CaseStyle::Camel => textkit_core::case::CaseStyle::Camel,
            CaseStyle::Pascal => textkit_core::case::CaseStyle::Pascal,
            CaseStyle::Snake => textkit_core::case::CaseStyle::Snake,
            CaseStyle::Kebab => textkit_core::case::CaseStyle::Kebab,
        }
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let text = app.input.read_text()?;

    if global.verbose {
        eprintln!("Input: {} characters", text.chars().count());
    }

    match app.style {
        Some(style) => {
            let converted = convert_case(&text, style.into());
            if app.json {
                print_json(&serde_json::json!({ "style": style, "value": converted }))?;
            } else {
                println!("{}", converted);
            }
            if app.copy {
                crate::clipboard::copy_or_warn(&converted);
            }
        }
        None => {
            let conversions = convert_all(&text);
            if app.json {
                print_json(&conversions)?;
            } else {
                output_formatted(&conversions);
            }
        }
    }

    Ok(())
}

fn output_formatted(conversions: &[CaseConversion]) {
    if is_tty() {
        banner("CASE CONVERTER");
        println!();
    }

    let mut table = new_table();
    for conversion in conversions {
        table.add_row(prettytable::row![
            conversion.label.green(),
            conversion.value
        ]);
    }
    table.printstd();
}
