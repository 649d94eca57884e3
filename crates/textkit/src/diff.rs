use crate::input::read_file;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::path::Path;
use textkit_core::diff::{diff_texts, DiffAlgorithm, DiffKind, DiffOutput};

#[derive(Debug, clap::Parser)]
#[command(name = "diff")]
#[command(about = "Compare two texts line by line")]
pub struct App {
    /// Original text file
    left: String,

    /// Modified text file
    right: String,

    /// Treat LEFT and RIGHT as literal text instead of file paths
    #[arg(short, long)]
    text: bool,

    /// Align lines with a longest-common-subsequence diff instead of by index
    #[arg(long)]
    lcs: bool,

    /// Hide unchanged lines
    #[arg(short, long)]
    changes_only: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let (left, right) = if app.text {
        (app.left, app.right)
    } else {
        (read_file(Path::new(&app.left))?, read_file(Path::new(&app.right))?)
    };

    let algorithm = if app.lcs {
        DiffAlgorithm::Lcs
    } else {
        DiffAlgorithm::Positional
    };

    if global.verbose {
        eprintln!("Algorithm: {:?}", algorithm);
    }

    let output = diff_texts(&left, &right, algorithm);
    log::debug!("{:?}", output.summary);

    if app.json {
        print_json(&output)
    } else {
        output_formatted(&output, app.changes_only);
        Ok(())
    }
}

fn output_formatted(output: &DiffOutput, changes_only: bool) {
    let tty = is_tty();

    if tty {
        banner("TEXT DIFF");
        println!();
    }

    let width = output
        .lines
        .iter()
        .map(|line| line.line)
        .max()
        .unwrap_or(0)
        .to_string()
        .len();

    for line in &output.lines {
        let number = f!("{:>width$}", line.line);
        match line.kind {
            DiffKind::Unchanged if changes_only => {}
            DiffKind::Unchanged => println!("{}   {}", number.dimmed(), line.value),
            DiffKind::Removed => println!(
                "{} {} {}",
                number.dimmed(),
                "-".red().bold(),
                line.value.red()
            ),
            DiffKind::Added => println!(
                "{} {} {}",
                number.dimmed(),
                "+".green().bold(),
                line.value.green()
            ),
        }
    }

    let summary = &output.summary;
    if tty {
        println!();
        if summary.is_identical() {
            println!("{}", "No differences found".green());
        } else {
            println!(
                "{} {}  {} {}  {} {}",
                "Unchanged:".bright_white(),
                summary.unchanged,
                "Added:".green(),
                summary.added,
                "Removed:".red(),
                summary.removed
            );
        }
    }
}
