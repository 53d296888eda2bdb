//! `agenda` — run the appointment availability engine from the command line.
//!
//! Reads the work schedule, existing bookings, and a structured booking
//! request as JSON files, then prints either the resolved search start
//! (`resolve`) or a full appointment proposal (`find`).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use agenda_engine::{propose, resolve_search_start, Booking, BookingRequest, WorkSchedule};

#[derive(Parser)]
#[command(name = "agenda", version, about = "Appointment availability engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the earliest open slot for a booking request.
    Find {
        /// Work schedule JSON file (workDays, startTime, endTime)
        #[arg(long)]
        schedule: PathBuf,
        /// Existing bookings JSON file (array of {start, end})
        #[arg(long)]
        bookings: PathBuf,
        /// Booking request JSON file (extraction-step output)
        #[arg(long)]
        request: PathBuf,
        /// Current instant, e.g. 2026-08-26T10:00:00 (defaults to the local clock)
        #[arg(long)]
        now: Option<NaiveDateTime>,
    },
    /// Print the search-start instant resolved from a request's hints.
    Resolve {
        /// Work schedule JSON file (workDays, startTime, endTime)
        #[arg(long)]
        schedule: PathBuf,
        /// Booking request JSON file (extraction-step output)
        #[arg(long)]
        request: PathBuf,
        /// Current instant, e.g. 2026-08-26T10:00:00 (defaults to the local clock)
        #[arg(long)]
        now: Option<NaiveDateTime>,
    },
}

/// On-disk schedule format: weekday flags Sunday-first, "HH:MM" window times.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleFile {
    work_days: [bool; 7],
    start_time: String,
    end_time: String,
}

fn parse_window_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("invalid work-window time '{s}' (expected HH:MM)"))
}

fn load_schedule(path: &Path) -> Result<WorkSchedule> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read schedule file {}", path.display()))?;
    let file: ScheduleFile = serde_json::from_str(&raw)
        .with_context(|| format!("invalid schedule JSON in {}", path.display()))?;
    let schedule = WorkSchedule::new(
        file.work_days,
        parse_window_time(&file.start_time)?,
        parse_window_time(&file.end_time)?,
    )?;
    Ok(schedule)
}

fn load_bookings(path: &Path) -> Result<Vec<Booking>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read bookings file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid bookings JSON in {}", path.display()))
}

fn load_request(path: &Path) -> Result<BookingRequest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read request file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid request JSON in {}", path.display()))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Find {
            schedule,
            bookings,
            request,
            now,
        } => {
            let schedule = load_schedule(&schedule)?;
            let bookings = load_bookings(&bookings)?;
            let request = load_request(&request)?;
            let now = now.unwrap_or_else(|| Local::now().naive_local());

            match propose(&request, now, &bookings, &schedule)? {
                Some(proposal) => {
                    println!("{}", serde_json::to_string_pretty(&proposal)?);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("no availability within the 30-day search horizon");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Resolve {
            schedule,
            request,
            now,
        } => {
            let schedule = load_schedule(&schedule)?;
            let request = load_request(&request)?;
            let now = now.unwrap_or_else(|| Local::now().naive_local());

            let start = resolve_search_start(
                now,
                request.date,
                request.time_preference.as_deref(),
                &schedule,
            );
            println!("{start}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
