use crate::input::{write_file, InputArgs};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::path::{Path, PathBuf};
use textkit_core::qr::{encode, render_bytes, render_terminal, QrCode, QrOptions};

#[derive(Debug, clap::Parser)]
#[command(name = "qr")]
#[command(about = "Generate a QR code")]
pub struct App {
    #[clap(flatten)]
    input: InputArgs,

    /// Edge of the exported image in pixels (200-500)
    #[arg(
        short,
        long,
        env = "TEXTKIT_QR_SIZE",
        default_value = "300",
        value_parser = clap::value_parser!(u32).range(200..=500)
    )]
    size: u32,

    /// Dark module color of the exported image
    #[arg(long, default_value = "#000000")]
    foreground: String,

    /// Light module color of the exported image
    #[arg(long, default_value = "#ffffff")]
    background: String,

    /// Export format used by --save
    #[arg(long, default_value = "png")]
    format: QrFormat,

    /// Save the QR code to a file (defaults to qr-code.<format>)
    #[arg(long, num_args = 0..=1)]
    save: Option<Option<PathBuf>>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrFormat {
    Png,
    Svg,
    Jpeg,
}

impl From<QrFormat> for textkit_core::qr::QrFormat {
    fn from(f: QrFormat) -> Self {
        match f {
            QrFormat::Png => textkit_core::qr::QrFormat::Png,
            QrFormat::Svg => textkit_core::qr::QrFormat::Svg,
            QrFormat::Jpeg => textkit_core::qr::QrFormat::Jpeg,
        }
    }
}

impl App {
    fn qr_options(&self) -> QrOptions {
        QrOptions {
            size: self.size,
            foreground: self.foreground.clone(),
            background: self.background.clone(),
        }
    }

    /// Resolved `--save` target, if any.
    fn save_path(&self) -> Option<PathBuf> {
        let format: textkit_core::qr::QrFormat = self.format.into();
        self.save.as_ref().map(|path| {
            path.clone()
                .unwrap_or_else(|| PathBuf::from(format!("qr-code.{}", format.extension())))
        })
    }
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let text = app.input.read_text()?;

    let code = encode(&text).map_err(|e| eyre!("{}", e))?;
    log::debug!("Encoded {} bytes as a {}x{} code", text.len(), code.width(), code.width());

    let saved = match app.save_path() {
        Some(path) => {
            save(&app, &code, &path)?;
            Some(path)
        }
        None => None,
    };

    if app.json {
        print_json(&serde_json::json!({
            "text": text,
            "modules": code.width(),
            "format": app.format,
            "saved": saved.as_ref().map(|p| p.display().to_string()),
        }))?;
        return Ok(());
    }

    println!("{}", render_terminal(&code));
    if let Some(path) = saved {
        eprintln!("{} {}", "Saved to".green(), path.display());
    }

    Ok(())
}

fn save(app: &App, code: &QrCode, path: &Path) -> Result<()> {
    let bytes =
        render_bytes(code, &app.qr_options(), app.format.into()).map_err(|e| eyre!("{}", e))?;
    write_file(path, bytes)
}
