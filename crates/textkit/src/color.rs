use crate::prelude::{println, *};
use colored::Colorize;
use textkit_core::color::{convert_color, parse_hex, ColorFormats};

#[derive(Debug, clap::Parser)]
#[command(name = "color")]
#[command(about = "Convert hex colors to RGB and HSL")]
pub struct App {
    /// Hex color such as "#6366f1" or 6366f1
    #[arg(default_value = "#6366f1")]
    hex: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the RGB value to the clipboard
    #[arg(long)]
    copy: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let formats = convert_color(&app.hex).map_err(|e| eyre!("{}", e))?;

    if app.json {
        print_json(&formats)?;
    } else {
        output_formatted(&app.hex, &formats)?;
    }

    if app.copy {
        crate::clipboard::copy_or_warn(&formats.rgb);
    }

    Ok(())
}

fn output_formatted(hex: &str, formats: &ColorFormats) -> Result<()> {
    if is_tty() {
        let rgb = parse_hex(hex).map_err(|e| eyre!("{}", e))?;
        println!("{}", "        ".on_truecolor(rgb.r, rgb.g, rgb.b));
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["HEX".green(), formats.hex]);
    table.add_row(prettytable::row!["RGB".green(), formats.rgb]);
    table.add_row(prettytable::row!["HSL".green(), formats.hsl]);
    table.printstd();

    Ok(())
}
