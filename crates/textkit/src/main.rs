use crate::prelude::*;
use clap::Parser;

mod age;
mod case;
mod clipboard;
mod color;
mod count;
mod diff;
mod error;
mod find;
mod hash;
mod input;
mod json;
mod list;
mod lorem;
mod password;
mod prelude;
mod qr;
mod reverse;
mod timestamp;
mod tools;
mod url;
mod username;
mod uuid;
mod words;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Everyday text utilities: case conversion, find & replace, diffs, lists, generators and converters"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TEXTKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert text between letter cases
    Case(crate::case::App),

    /// Find and replace text
    Find(crate::find::App),

    /// Compare two texts line by line
    Diff(crate::diff::App),

    /// Sort, shuffle, reverse and deduplicate a list of lines
    List(crate::list::App),

    /// Spell out a number in English words
    Words(crate::words::App),

    /// Count words, characters, sentences and paragraphs
    Count(crate::count::App),

    /// Reverse text by characters or words
    Reverse(crate::reverse::App),

    /// Generate string hashes and checksums
    Hash(crate::hash::App),

    /// Generate version 4 UUIDs
    Uuid(crate::uuid::App),

    /// Generate a random password
    Password(crate::password::App),

    /// Generate usernames
    Username(crate::username::App),

    /// Generate lorem ipsum placeholder text
    Lorem(crate::lorem::App),

    /// Generate a QR code
    Qr(crate::qr::App),

    /// Encode or decode URL components
    Url(crate::url::App),

    /// Convert between Unix timestamps and dates
    Timestamp(crate::timestamp::App),

    /// Pretty print or minify JSON
    Json(crate::json::App),

    /// Calculate an age from a birth date
    Age(crate::age::App),

    /// Convert hex colors to RGB and HSL
    Color(crate::color::App),

    /// List the available tools
    Tools(crate::tools::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    log::debug!("{:?}", app.command);

    match app.command {
        SubCommands::Case(sub_app) => crate::case::run(sub_app, app.global).await,
        SubCommands::Find(sub_app) => crate::find::run(sub_app, app.global).await,
        SubCommands::Diff(sub_app) => crate::diff::run(sub_app, app.global).await,
        SubCommands::List(sub_app) => crate::list::run(sub_app, app.global).await,
        SubCommands::Words(sub_app) => crate::words::run(sub_app, app.global).await,
        SubCommands::Count(sub_app) => crate::count::run(sub_app, app.global).await,
        SubCommands::Reverse(sub_app) => crate::reverse::run(sub_app, app.global).await,
        SubCommands::Hash(sub_app) => crate::hash::run(sub_app, app.global).await,
        SubCommands::Uuid(sub_app) => crate::uuid::run(sub_app, app.global).await,
        SubCommands::Password(sub_app) => crate::password::run(sub_app, app.global).await,
        SubCommands::Username(sub_app) => crate::username::run(sub_app, app.global).await,
        SubCommands::Lorem(sub_app) => crate::lorem::run(sub_app, app.global).await,
        SubCommands::Qr(sub_app) => crate::qr::run(sub_app, app.global).await,
        SubCommands::Url(sub_app) => crate::url::run(sub_app, app.global).await,
        SubCommands::Timestamp(sub_app) => crate::timestamp::run(sub_app, app.global).await,
        SubCommands::Json(sub_app) => crate::json::run(sub_app, app.global).await,
        SubCommands::Age(sub_app) => crate::age::run(sub_app, app.global).await,
        SubCommands::Color(sub_app) => crate::color::run(sub_app, app.global).await,
        SubCommands::Tools(sub_app) => crate::tools::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
