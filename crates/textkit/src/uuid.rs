use crate::prelude::{println, *};
use textkit_core::uuid::generate_many;

#[derive(Debug, clap::Parser)]
#[command(name = "uuid")]
#[command(about = "Generate version 4 UUIDs")]
pub struct App {
    /// Number of UUIDs to generate (1-50)
    #[arg(
        short = 'n',
        long,
        env = "TEXTKIT_UUID_COUNT",
        default_value = "1",
        value_parser = clap::value_parser!(u64).range(1..=50)
    )]
    count: u64,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the UUIDs to the clipboard
    #[arg(long)]
    copy: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let count = usize::try_from(app.count)?;
    let uuids = generate_many(count, &mut rand::thread_rng());
    let joined = uuids.join("\n");

    if app.json {
        print_json(&uuids)?;
    } else {
        println!("{}", joined);
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&joined);
    }

    Ok(())
}
