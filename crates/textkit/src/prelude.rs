pub use crate::error::Error;

pub use anstream::eprintln;
pub use anstream::println;
pub use color_eyre::eyre::{eyre, Context, OptionExt, Result};
pub use std::format as f;

use colored::Colorize;
use std::io::IsTerminal;

pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .padding(1, 1)
        .build();

    table.set_format(format);

    table
}

/// Whether decorative output should be printed.
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Print the section banner used by every command.
pub fn banner(title: &str) {
    println!("\n{}", "=".repeat(80).bright_cyan());
    println!("{}", title.bright_cyan().bold());
    println!("{}", "=".repeat(80).bright_cyan());
}

/// Pretty-print any serializable value to stdout.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
