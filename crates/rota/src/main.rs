use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand};
use rota_core::config::ScheduleConfig;
use rota_core::pipeline::{check_input, run_schedule};
use rota_parser::RowError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Meeting-point schedule builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the padded per-day, per-location schedule archive
    Split(SplitArgs),
    /// Parse and validate the input without writing an archive
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Slot length in minutes
    #[arg(long, default_value_t = 20)]
    slot_minutes: u32,
    /// First slot of the day, HH:MM
    #[arg(long, default_value = "09:00")]
    day_start: String,
    /// End of the day (exclusive), HH:MM
    #[arg(long, default_value = "18:00")]
    day_end: String,
    /// Separator inside the input date column
    #[arg(long, default_value_t = '/')]
    date_delimiter: char,
}

#[derive(Args, Debug)]
struct SplitArgs {
    /// Input bookings CSV
    input: PathBuf,
    /// Where to write the ZIP archive
    #[arg(long, default_value = "schedules.zip")]
    out: PathBuf,
    /// Also write the run receipt as JSON
    #[arg(long)]
    receipt_json: Option<PathBuf>,
    #[command(flatten)]
    grid: GridArgs,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Input bookings CSV
    input: PathBuf,
    #[command(flatten)]
    grid: GridArgs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Split(args) => handle_split(args),
        Command::Check(args) => handle_check(args),
    }
}

fn handle_split(args: SplitArgs) -> Result<()> {
    let config = schedule_config(&args.grid)?;
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let outcome = run_schedule(&input, &config)?;
    fs::write(&args.out, &outcome.archive)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!(
        path = %args.out.display(),
        bytes = outcome.archive.len(),
        "wrote schedule archive"
    );

    let receipt = &outcome.receipt;
    if receipt.counts.rejected > 0 || receipt.counts.dropped > 0 {
        warn!(
            rejected = receipt.counts.rejected,
            dropped = receipt.counts.dropped,
            "input rows were rejected or dropped"
        );
    }
    println!(
        "Scheduled {} of {} rows into {} files ({} rejected, {} dropped).",
        receipt.counts.scheduled,
        receipt.counts.rows,
        receipt.files.len(),
        receipt.counts.rejected,
        receipt.counts.dropped,
    );
    for file in &receipt.files {
        println!("  {}", file);
    }
    report_row_errors(&receipt.rejects);
    if !receipt.dropped.is_empty() {
        println!("Dropped appointments (never matched a slot):");
        for dropped in &receipt.dropped {
            println!(
                "  line {}: {} at {}",
                dropped.line, dropped.location, dropped.occurs_at
            );
        }
    }

    if let Some(path) = &args.receipt_json {
        let json = serde_json::to_vec_pretty(receipt).context("failed to serialize receipt")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote run receipt");
    }

    println!("Wrote {}.", args.out.display());
    Ok(())
}

fn handle_check(args: CheckArgs) -> Result<()> {
    let config = schedule_config(&args.grid)?;
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let batch = check_input(&input, &config)?;
    println!(
        "Parsed {} appointments, {} rejected rows.",
        batch.appointments.len(),
        batch.rejects.len()
    );
    report_row_errors(&batch.rejects);
    Ok(())
}

fn schedule_config(grid: &GridArgs) -> Result<ScheduleConfig> {
    let day_start = NaiveTime::parse_from_str(&grid.day_start, "%H:%M")
        .with_context(|| format!("invalid --day-start '{}'", grid.day_start))?;
    let day_end = NaiveTime::parse_from_str(&grid.day_end, "%H:%M")
        .with_context(|| format!("invalid --day-end '{}'", grid.day_end))?;

    Ok(ScheduleConfig {
        slot_length_minutes: grid.slot_minutes,
        day_start,
        day_end,
        date_delimiter: grid.date_delimiter,
    })
}

fn report_row_errors(rejects: &[RowError]) {
    if rejects.is_empty() {
        return;
    }
    println!("Rejected rows:");
    for reject in rejects {
        println!("  {}", reject);
    }
}
