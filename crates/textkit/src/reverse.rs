use crate::input::InputArgs;
use crate::prelude::{println, *};
use textkit_core::reverse::{reverse_text, ReverseMode};

#[derive(Debug, clap::Parser)]
#[command(name = "reverse")]
#[command(about = "Reverse text by characters or words")]
pub struct App {
    #[clap(flatten)]
    input: InputArgs,

    /// Reverse word order instead of characters
    #[arg(short, long)]
    words: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the result to the clipboard
    #[arg(long)]
    copy: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let text = app.input.read_text()?;
    let mode = if app.words {
        ReverseMode::Words
    } else {
        ReverseMode::Characters
    };

    let reversed = reverse_text(&text, mode).map_err(|e| eyre!("{}", e))?;

    if app.json {
        print_json(&serde_json::json!({ "mode": mode, "value": reversed }))?;
    } else {
        println!("{}", reversed);
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&reversed);
    }

    Ok(())
}
