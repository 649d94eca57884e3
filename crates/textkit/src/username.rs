use crate::prelude::{println, *};
use textkit_core::username::{generate_usernames, UsernameOptions};

#[derive(Debug, clap::Parser)]
#[command(name = "username")]
#[command(about = "Generate usernames")]
pub struct App {
    /// Maximum username length (4-20)
    #[arg(
        short,
        long,
        env = "TEXTKIT_USERNAME_LENGTH",
        default_value = "8",
        value_parser = clap::value_parser!(u64).range(4..=20)
    )]
    length: u64,

    /// Do not append digits
    #[arg(long)]
    no_numbers: bool,

    /// Sometimes append `_` or `-`
    #[arg(short, long)]
    symbols: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the usernames to the clipboard
    #[arg(long)]
    copy: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let options = UsernameOptions {
        max_length: usize::try_from(app.length)?,
        include_numbers: !app.no_numbers,
        include_symbols: app.symbols,
    };
    log::debug!("{:?}", options);

    let names = generate_usernames(&options, &mut rand::thread_rng());
    let joined = names.join("\n");

    if app.json {
        print_json(&names)?;
    } else {
        println!("{}", joined);
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&joined);
    }

    Ok(())
}
