use anyhow::{Context, Result};
use calendar_math_core::{
    date_range, date_range_days, nth_weekday_of_month, nth_weekday_of_month_of, week_bounds,
};
use chrono::{NaiveDate, Weekday};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "calendar-math",
    about = "Week boundaries, nth weekdays and date ranges"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the first and last day of the week containing a date
    Week {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,

        /// First day of the week (sun, mon, ...)
        #[arg(long, default_value = "sun")]
        start: Weekday,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the nth occurrence of a weekday in a month
    Nth {
        /// Weekday to find (sun, mon, ...)
        weekday: Weekday,

        /// Occurrence within the month (1-5)
        occurrence: u32,

        /// Take year and month from this date (YYYY-MM-DD)
        #[arg(long, conflicts_with_all = ["year", "month"])]
        date: Option<NaiveDate>,

        #[arg(long, required_unless_present = "date")]
        year: Option<i32>,

        /// Month (1-12)
        #[arg(long, required_unless_present = "date")]
        month: Option<u32>,
    },

    /// List every date in an inclusive range, one per line
    Range {
        /// First date (YYYY-MM-DD)
        from: NaiveDate,

        /// Last date (YYYY-MM-DD); earlier than FROM lists backwards
        #[arg(required_unless_present = "days", conflicts_with = "days")]
        to: Option<NaiveDate>,

        /// Number of days starting at FROM; negative counts go backwards
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,
    },
}

fn cmd_week(date: NaiveDate, start: Weekday, json: bool) -> Result<()> {
    let bounds = week_bounds(date, start);
    if json {
        let out = serde_json::to_string(&bounds).context("failed to serialize week bounds")?;
        println!("{out}");
    } else {
        println!("{} {}", bounds.start, bounds.end);
    }
    Ok(())
}

fn cmd_nth(
    weekday: Weekday,
    occurrence: u32,
    date: Option<NaiveDate>,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<()> {
    let found = match (date, year, month) {
        (Some(date), _, _) => nth_weekday_of_month_of(date, weekday, occurrence)
            .with_context(|| format!("failed to find {weekday} #{occurrence} in month of {date}"))?,
        (None, Some(year), Some(month)) => nth_weekday_of_month(year, month, weekday, occurrence)
            .with_context(|| {
                format!("failed to find {weekday} #{occurrence} in {year}-{month:02}")
            })?,
        _ => anyhow::bail!("either --date or both --year and --month are required"),
    };

    match found {
        Some(d) => println!("{d}"),
        None => println!("none"),
    }
    Ok(())
}

fn cmd_range(from: NaiveDate, to: Option<NaiveDate>, days: Option<i64>) -> Result<()> {
    let range = match (to, days) {
        (Some(to), _) => date_range(from, to),
        (None, Some(days)) => date_range_days(from, days),
        (None, None) => anyhow::bail!("either TO or --days is required"),
    };
    debug!("listing {} date(s) from {from}", range.len());

    for date in range {
        println!("{date}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    match cli.command {
        Commands::Week { date, start, json } => cmd_week(date, start, json)?,
        Commands::Nth {
            weekday,
            occurrence,
            date,
            year,
            month,
        } => cmd_nth(weekday, occurrence, date, year, month)?,
        Commands::Range { from, to, days } => cmd_range(from, to, days)?,
    }

    Ok(())
}
