use crate::input::{strip_trailing_newline, InputArgs};
use crate::prelude::{println, *};
use textkit_core::url::{process_url, UrlMode};

#[derive(Debug, clap::Parser)]
#[command(name = "url")]
#[command(about = "Encode or decode URL components")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Percent-encode text the way encodeURIComponent does
    #[clap(name = "encode")]
    Encode(UrlOptions),

    /// Decode percent escapes
    #[clap(name = "decode")]
    Decode(UrlOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct UrlOptions {
    #[clap(flatten)]
    input: InputArgs,

    /// Keep the trailing newline of file or stdin input
    #[arg(long)]
    keep_newline: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the result to the clipboard
    #[arg(long)]
    copy: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Encode(options) => convert(options, UrlMode::Encode),
        Commands::Decode(options) => convert(options, UrlMode::Decode),
    }
}

fn convert(options: UrlOptions, mode: UrlMode) -> Result<()> {
    let mut text = options.input.read()?;
    if !options.keep_newline {
        strip_trailing_newline(&mut text);
    }

    let converted = process_url(&text, mode).map_err(|e| eyre!("{}", e))?;

    if options.json {
        print_json(&serde_json::json!({
            "mode": mode,
            "input": text,
            "output": converted,
        }))?;
    } else {
        println!("{}", converted);
    }

    if options.copy {
        crate::clipboard::copy_or_warn(&converted);
    }

    Ok(())
}
