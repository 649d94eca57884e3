use crate::prelude::{println, *};
use chrono::Local;
use colored::Colorize;
use textkit_core::age::{calculate_age, parse_date, Age};

#[derive(Debug, clap::Parser)]
#[command(name = "age")]
#[command(about = "Calculate an age from a birth date")]
pub struct App {
    /// Birth date (YYYY-MM-DD)
    birth_date: String,

    /// Reference date instead of today (YYYY-MM-DD)
    #[arg(long)]
    on: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    let birth = parse_date(&app.birth_date).map_err(|e| eyre!("{}", e))?;
    let today = match &app.on {
        Some(date) => parse_date(date).map_err(|e| eyre!("{}", e))?,
        None => Local::now().date_naive(),
    };
    log::debug!("birth={birth} today={today}");

    let age = calculate_age(birth, today).map_err(|e| eyre!("{}", e))?;

    if app.json {
        print_json(&age)
    } else {
        output_formatted(&age);
        Ok(())
    }
}

fn output_formatted(age: &Age) {
    if !is_tty() {
        println!(
            "{} years, {} months, {} days",
            age.years, age.months, age.days
        );
        return;
    }

    banner("AGE");
    println!();
    let mut table = new_table();
    table.add_row(prettytable::row!["Years".green(), age.years]);
    table.add_row(prettytable::row!["Months".green(), age.months]);
    table.add_row(prettytable::row!["Days".green(), age.days]);
    table.add_row(prettytable::row!["Total days".green(), age.total_days]);
    table.printstd();
}
