use crate::input::InputArgs;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use textkit_core::hash::{generate_all_hashes, HashDigest};

#[derive(Debug, clap::Parser)]
#[command(name = "hash")]
#[command(about = "Generate string hashes and checksums")]
pub struct App {
    #[clap(flatten)]
    input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let text = app.input.read()?;
    let hashes = generate_all_hashes(&text);

    if app.json {
        print_json(&hashes)
    } else {
        output_formatted(&hashes);
        Ok(())
    }
}

fn output_formatted(hashes: &[HashDigest]) {
    let tty = is_tty();
    if tty {
        banner("HASH GENERATOR");
        println!();
    }

    let mut table = new_table();
    for hash in hashes {
        let name = if hash.cryptographic {
            hash.name.bright_magenta()
        } else {
            hash.name.green()
        };
        table.add_row(prettytable::row![name, hash.value]);
    }
    table.printstd();

    if tty {
        eprintln!(
            "\n{}",
            "Only MD5 and SHA-256 are standard checksums; the others are quick non-cryptographic hashes."
                .dimmed()
        );
    }
}
