use crate::input::write_file;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use textkit_core::lorem::{generate_lorem, LoremOptions};

#[derive(Debug, clap::Parser)]
#[command(name = "lorem")]
#[command(about = "Generate lorem ipsum placeholder text")]
pub struct App {
    /// Number of paragraphs (1-10)
    #[arg(
        short,
        long,
        env = "TEXTKIT_LOREM_PARAGRAPHS",
        default_value = "3",
        value_parser = clap::value_parser!(u64).range(1..=10)
    )]
    paragraphs: u64,

    /// Words per paragraph (10-200)
    #[arg(
        short,
        long,
        env = "TEXTKIT_LOREM_WORDS",
        default_value = "50",
        value_parser = clap::value_parser!(u64).range(10..=200)
    )]
    words: u64,

    /// Do not start with "Lorem ipsum dolor sit amet"
    #[arg(long)]
    no_classic_start: bool,

    /// Seed for reproducible output
    #[arg(long, env = "TEXTKIT_SEED")]
    seed: Option<u64>,

    /// Save the text to a file
    #[arg(long, num_args = 0..=1, default_missing_value = "lorem-ipsum.txt")]
    save: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the text to the clipboard
    #[arg(long)]
    copy: bool,
}

impl App {
    fn lorem_options(&self) -> Result<LoremOptions> {
        Ok(LoremOptions {
            paragraphs: usize::try_from(self.paragraphs)?,
            words_per_paragraph: usize::try_from(self.words)?,
            start_with_lorem: !self.no_classic_start,
        })
    }
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let options = app.lorem_options()?;
    log::debug!("{:?}", options);

    let mut rng = match app.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let text = generate_lorem(&options, &mut rng);

    if app.json {
        print_json(&serde_json::json!({ "options": options, "text": text }))?;
    } else {
        println!("{}", text);
    }

    if let Some(path) = &app.save {
        write_file(path, &text)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&text);
    }

    Ok(())
}
