use crate::input::InputArgs;
use crate::prelude::{println, *};
use textkit_core::json::{format_json, JsonStyle};

#[derive(Debug, clap::Parser)]
#[command(name = "json")]
#[command(about = "Pretty print or minify JSON")]
pub struct App {
    #[clap(flatten)]
    input: InputArgs,

    /// Remove all insignificant whitespace
    #[arg(short, long)]
    minify: bool,

    /// Wrap the result in a JSON envelope with the chosen style
    #[arg(long)]
    json: bool,

    /// Copy the result to the clipboard
    #[arg(long)]
    copy: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let text = app.input.read()?;
    let style = if app.minify {
        JsonStyle::Minified
    } else {
        JsonStyle::Pretty
    };

    let formatted = format_json(&text, style).map_err(|e| eyre!("{}", e))?;

    if app.json {
        print_json(&serde_json::json!({ "style": style, "output": formatted }))?;
    } else {
        println!("{}", formatted);
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&formatted);
    }

    Ok(())
}
