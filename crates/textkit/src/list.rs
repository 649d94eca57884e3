use crate::input::InputArgs;
use crate::prelude::{eprintln, println, *};
use rand::rngs::StdRng;
use rand::SeedableRng;
use textkit_core::list::{process_list, ListOptions};

#[derive(Debug, clap::Parser)]
#[command(name = "list")]
#[command(about = "Sort, shuffle, reverse and deduplicate a list of lines")]
pub struct App {
    #[clap(flatten)]
    input: InputArgs,

    /// Operation applied after normalization
    #[arg(short, long, default_value = "sort")]
    operation: ListOperation,

    /// Keep leading and trailing whitespace on each line
    #[arg(long)]
    no_trim: bool,

    /// Keep empty lines
    #[arg(long)]
    keep_empty: bool,

    /// Drop repeated lines, keeping the first occurrence
    #[arg(short, long)]
    dedupe: bool,

    /// Seed for a reproducible shuffle
    #[arg(long, env = "TEXTKIT_SEED")]
    seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the result to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListOperation {
    /// Sort A to Z, ignoring case and accents
    Sort,
    /// Sort Z to A, ignoring case and accents
    SortDesc,
    /// Random order
    Shuffle,
    /// Reverse the current order
    Reverse,
}

impl From<ListOperation> for textkit_core::list::ListOperation {
    fn from(o: ListOperation) -> Self {
        match o {
            ListOperation::Sort => textkit_core::list::ListOperation::SortAscending,
            ListOperation::SortDesc => textkit_core::list::ListOperation::SortDescending,
            ListOperation::Shuffle => textkit_core::list::ListOperation::Shuffle,
            ListOperation::Reverse => textkit_core::list::ListOperation::Reverse,
        }
    }
}

impl App {
    fn list_options(&self) -> ListOptions {
        ListOptions {
            trim: !self.no_trim,
            remove_empty: !self.keep_empty,
            remove_duplicates: self.dedupe,
        }
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let text = app.input.read_text()?;
    let options = app.list_options();
    log::debug!("{:?} {:?}", options, app.operation);

    let mut rng = match app.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let items = process_list(&text, &options, app.operation.into(), &mut rng);
    let joined = items.join("\n");

    if global.verbose {
        eprintln!("{} items after normalization", items.len());
    }

    if app.json {
        print_json(&serde_json::json!({
            "operation": app.operation,
            "count": items.len(),
            "items": items,
        }))?;
    } else {
        println!("{}", joined);
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&joined);
    }

    Ok(())
}
