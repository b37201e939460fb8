use blake3::Hasher;
use serde::Serialize;
use tracing::debug;

use rota_parser::{ingest_appointments, IngestBatch, NormalizedAppointment, RowError};

use crate::archive::{build_archive, build_schedule_file, schedule_filename, ScheduleFile};
use crate::config::ScheduleConfig;
use crate::error::Result;
use crate::padding::{pad_series, PaddedSchedule};
use crate::partition::partition_appointments;

/// Serializable summary of one run. Deterministic for a given input and
/// configuration; the archive bytes are idempotent the same way.
#[derive(Debug, Clone, Serialize)]
pub struct RunReceipt {
    /// blake3 hex digest of the raw input bytes.
    pub input_hash: String,
    pub counts: RunCounts,
    pub rejects: Vec<RowError>,
    pub dropped: Vec<DroppedAppointment>,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunCounts {
    pub rows: usize,
    pub scheduled: usize,
    pub rejected: usize,
    pub dropped: usize,
}

/// An appointment the padding grid never matched: its timestamp fell outside
/// the day window, or an earlier appointment had already claimed its slot.
#[derive(Debug, Clone, Serialize)]
pub struct DroppedAppointment {
    pub line: usize,
    pub location: String,
    pub occurs_at: String,
}

impl DroppedAppointment {
    fn new(appointment: &NormalizedAppointment) -> Self {
        Self {
            line: appointment.line,
            location: appointment.meeting_point().to_string(),
            occurs_at: appointment.occurs_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub archive: Vec<u8>,
    pub receipt: RunReceipt,
}

/// Validates the configuration and ingests the input without producing an
/// archive. Backs dry-run inspection.
pub fn check_input(input: &str, config: &ScheduleConfig) -> Result<IngestBatch> {
    config.validate()?;
    Ok(ingest_appointments(input, config.date_delimiter)?)
}

/// Runs the whole pipeline: ingest, partition by weekday and meeting point,
/// pad each series against the day grid, render the sheets and bundle them
/// into one archive. Row-level problems land in the receipt, not in `Err`.
/// Locations whose names slug to the same filename collapse into one sheet,
/// the later series winning.
pub fn run_schedule(input: &str, config: &ScheduleConfig) -> Result<RunOutcome> {
    config.validate()?;

    let input_hash = compute_hash(input.as_bytes());
    let IngestBatch {
        appointments,
        rejects,
    } = ingest_appointments(input, config.date_delimiter)?;
    let total_rows = appointments.len() + rejects.len();
    debug!(
        rows = total_rows,
        rejected = rejects.len(),
        "ingested booking rows"
    );

    // Distinct locations can share a filename slug ("Room A", "ROOM A"); the
    // later series keeps the entry, the way a filename-keyed map would.
    let mut schedules: Vec<(String, PaddedSchedule)> = Vec::new();
    for series in partition_appointments(appointments) {
        let schedule = pad_series(series, config);
        let name = schedule_filename(schedule.weekday, &schedule.location);
        match schedules.iter().position(|(existing, _)| existing == &name) {
            Some(index) => schedules[index].1 = schedule,
            None => schedules.push((name, schedule)),
        }
    }

    let mut files: Vec<ScheduleFile> = Vec::new();
    let mut dropped: Vec<DroppedAppointment> = Vec::new();
    let mut scheduled = 0usize;
    for (_, schedule) in &schedules {
        scheduled += schedule.appointment_count();
        for appointment in &schedule.unmatched {
            dropped.push(DroppedAppointment::new(appointment));
        }
        files.push(build_schedule_file(schedule));
    }

    let archive = build_archive(&files)?;
    debug!(
        files = files.len(),
        dropped = dropped.len(),
        "built schedule archive"
    );

    let receipt = RunReceipt {
        input_hash,
        counts: RunCounts {
            rows: total_rows,
            scheduled,
            rejected: rejects.len(),
            dropped: dropped.len(),
        },
        rejects,
        dropped,
        files: files.into_iter().map(|file| file.name).collect(),
    };

    Ok(RunOutcome { archive, receipt })
}

fn compute_hash(contents: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(contents);
    hasher.finalize().to_hex().to_string()
}
