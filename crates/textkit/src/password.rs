use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use textkit_core::password::{generate_password, PasswordOptions, Strength};

#[derive(Debug, clap::Parser)]
#[command(name = "password")]
#[command(about = "Generate a random password")]
pub struct App {
    /// Password length (4-64)
    #[arg(
        short,
        long,
        env = "TEXTKIT_PASSWORD_LENGTH",
        default_value = "12",
        value_parser = clap::value_parser!(u64).range(4..=64)
    )]
    length: u64,

    /// Leave out uppercase letters
    #[arg(long)]
    no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    no_numbers: bool,

    /// Include symbols
    #[arg(short, long)]
    symbols: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the password to the clipboard
    #[arg(long)]
    copy: bool,
}

impl App {
    fn password_options(&self) -> Result<PasswordOptions> {
        Ok(PasswordOptions {
            length: usize::try_from(self.length)?,
            uppercase: !self.no_uppercase,
            lowercase: !self.no_lowercase,
            numbers: !self.no_numbers,
            symbols: self.symbols,
        })
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let options = app.password_options()?;
    log::debug!("{:?}", options);

    if global.verbose {
        eprintln!("Options: {:?}", options);
    }

    let generated =
        generate_password(&options, &mut rand::thread_rng()).map_err(|e| eyre!("{}", e))?;

    if app.json {
        print_json(&generated)?;
    } else if is_tty() {
        let strength = match generated.strength {
            Strength::Weak => generated.strength.to_string().red(),
            Strength::Medium => generated.strength.to_string().yellow(),
            Strength::Strong => generated.strength.to_string().green(),
        };
        println!("{}", generated.password.bright_white().bold());
        eprintln!("{}: {}", "Strength".green(), strength);
    } else {
        println!("{}", generated.password);
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&generated.password);
    }

    Ok(())
}
