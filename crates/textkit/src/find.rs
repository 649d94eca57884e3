use crate::input::InputArgs;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde::Serialize;
use textkit_core::find_replace::{
    find_matches, find_replace, FindOptions, FindReplaceError, MatchSpan,
};

#[derive(Debug, clap::Parser)]
#[command(name = "find")]
#[command(about = "Find and replace text")]
pub struct App {
    /// Text or regular expression to search for
    pattern: String,

    #[clap(flatten)]
    input: InputArgs,

    /// Replace every match with this text (highlights matches when omitted)
    #[arg(short, long)]
    replace: Option<String>,

    /// Match letter case exactly
    #[arg(short = 'c', long)]
    case_sensitive: bool,

    /// Only match whole words
    #[arg(short, long)]
    whole_word: bool,

    /// Treat the pattern as a regular expression
    #[arg(short = 'e', long)]
    regex: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the replaced text to the clipboard
    #[arg(long, requires = "replace")]
    copy: bool,
}

impl App {
    fn find_options(&self) -> FindOptions {
        FindOptions {
            case_sensitive: self.case_sensitive,
            whole_word: self.whole_word,
            use_regex: self.regex,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub pattern: String,
    pub count: usize,
    pub matches: Vec<MatchSpan>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let text = app.input.read_text()?;
    let options = app.find_options();
    log::debug!("{:?}", options);

    if global.verbose {
        eprintln!("Pattern: {:?} {:?}", app.pattern, options);
    }

    match &app.replace {
        Some(replacement) => replace(&app, &text, replacement, &options),
        None => search(&app, &text, &options),
    }
}

fn replace(app: &App, text: &str, replacement: &str, options: &FindOptions) -> Result<()> {
    let outcome = find_replace(text, &app.pattern, replacement, options);

    if app.json {
        print_json(&outcome)?;
    }

    if let Some(error) = &outcome.error {
        return Err(eyre!("Invalid pattern: {}", error));
    }

    if !app.json {
        println!("{}", outcome.text);
        if is_tty() {
            eprintln!(
                "\n{}: {}",
                "Replaced".green(),
                outcome.matches.to_string().bright_yellow()
            );
        }
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&outcome.text);
    }

    Ok(())
}

fn search(app: &App, text: &str, options: &FindOptions) -> Result<()> {
    let matches = match search_matches(text, &app.pattern, options) {
        Ok(matches) => matches,
        Err(err) => {
            if app.json {
                print_json(&serde_json::json!({
                    "pattern": app.pattern,
                    "count": 0,
                    "matches": [],
                    "error": err.to_string(),
                }))?;
            }
            return Err(eyre!("Invalid pattern: {}", err));
        }
    };

    if app.json {
        return print_json(&SearchOutput {
            pattern: app.pattern.clone(),
            count: matches.len(),
            matches,
        });
    }

    println!("{}", render_highlighted(text, &matches));
    if is_tty() {
        eprintln!(
            "\n{}: {}",
            "Matches".green(),
            matches.len().to_string().bright_yellow()
        );
    }

    Ok(())
}

/// An empty pattern matches nothing, as in replace mode.
fn search_matches(
    text: &str,
    pattern: &str,
    options: &FindOptions,
) -> Result<Vec<MatchSpan>, FindReplaceError> {
    match find_matches(text, pattern, options) {
        Err(FindReplaceError::EmptyPattern) => Ok(Vec::new()),
        result => result,
    }
}

/// Interleave untouched text with colored matches.
fn render_highlighted(text: &str, matches: &[MatchSpan]) -> String {
    let mut rendered = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in matches {
        rendered.push_str(&text[cursor..span.start]);
        rendered.push_str(&span.text.black().on_yellow().to_string());
        cursor = span.end;
    }
    rendered.push_str(&text[cursor..]);

    rendered
}
