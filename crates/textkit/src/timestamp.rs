use crate::prelude::{eprintln, println, *};
use chrono::{Local, Utc};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use textkit_core::timestamp::{date_to_timestamp, format_long, timestamp_to_iso, to_iso};

#[derive(Debug, clap::Parser)]
#[command(name = "timestamp")]
#[command(about = "Convert between Unix timestamps and dates")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert a Unix timestamp (seconds or milliseconds) to an ISO date
    #[clap(name = "to-date")]
    ToDate(ToDateOptions),

    /// Convert a date string to a Unix timestamp in milliseconds
    #[clap(name = "to-timestamp")]
    ToTimestamp(ToTimestampOptions),

    /// Show the current time
    #[clap(name = "now")]
    Now(NowOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ToDateOptions {
    /// Timestamp; values above 1e12 are read as milliseconds
    #[arg(allow_hyphen_values = true)]
    timestamp: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ToTimestampOptions {
    /// Date such as 2024-01-01, 2024-01-01 12:00:00 or 2024-01-01T12:00:00Z
    date: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct NowOptions {
    /// Refresh every second until Ctrl-C
    #[arg(short, long)]
    watch: bool,

    /// Output as JSON
    #[arg(long, conflicts_with = "watch")]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct NowOutput {
    pub local: String,
    pub iso: String,
    pub unix_seconds: i64,
    pub unix_millis: i64,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    match app.command {
        Commands::ToDate(options) => to_date(options),
        Commands::ToTimestamp(options) => to_timestamp(options),
        Commands::Now(options) => now(options).await,
    }
}

fn to_date(options: ToDateOptions) -> Result<()> {
    let conversion = timestamp_to_iso(&options.timestamp).map_err(|e| eyre!("{}", e))?;

    if options.json {
        print_json(&conversion)
    } else {
        println!("{}", conversion.iso);
        Ok(())
    }
}

fn to_timestamp(options: ToTimestampOptions) -> Result<()> {
    let conversion = date_to_timestamp(&options.date).map_err(|e| eyre!("{}", e))?;

    if options.json {
        print_json(&conversion)
    } else {
        println!("{}", conversion.timestamp_ms);
        Ok(())
    }
}

fn current_time() -> NowOutput {
    let now = Utc::now();
    NowOutput {
        local: format_long(&now.with_timezone(&Local)),
        iso: to_iso(&now),
        unix_seconds: now.timestamp(),
        unix_millis: now.timestamp_millis(),
    }
}

async fn now(options: NowOptions) -> Result<()> {
    if options.json {
        return print_json(&current_time());
    }

    if !options.watch {
        let output = current_time();
        println!("{}", output.local.bright_white().bold());
        println!("{}: {}", "ISO".green(), output.iso);
        println!("{}: {}", "Unix".green(), output.unix_seconds);
        return Ok(());
    }

    eprintln!("{}", "Press Ctrl-C to stop".dimmed());
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let output = current_time();
                let mut stdout = anstream::stdout();
                write!(
                    stdout,
                    "\r{}  {}",
                    output.local.bright_white().bold(),
                    output.unix_seconds.to_string().dimmed()
                )?;
                stdout.flush()?;
            }
            result = &mut ctrl_c => {
                result.context("Failed to listen for Ctrl-C")?;
                println!();
                log::debug!("Clock stopped");
                return Ok(());
            }
        }
    }
}
