use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::ReaderBuilder;

use crate::columns;
use crate::errors::{IngestError, RowError};
use crate::model::{NormalizedAppointment, RawAppointmentRow};

/// Outcome of one ingestion pass: every row either normalizes into an
/// appointment or lands in `rejects` with its line number. Only a missing
/// header column or an unreadable header row aborts the whole pass.
#[derive(Debug, Default)]
pub struct IngestBatch {
    pub appointments: Vec<NormalizedAppointment>,
    pub rejects: Vec<RowError>,
}

/// Reads a comma-separated dataset with a header row and normalizes each
/// record. `date_delimiter` is the separator inside the `date` field
/// (day, month, year order is fixed).
pub fn ingest_appointments(
    input: &str,
    date_delimiter: char,
) -> Result<IngestBatch, IngestError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Header { source })?;
    let header_names: Vec<String> = headers.iter().map(|name| name.trim().to_string()).collect();

    // A file with no header row at all is an empty dataset, not a header error.
    if header_names.is_empty() {
        return Ok(IngestBatch::default());
    }

    for column in columns::REQUIRED {
        if !header_names.iter().any(|name| name == column) {
            return Err(IngestError::MissingColumn { column });
        }
    }

    let mut batch = IngestBatch::default();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let line = err
                    .position()
                    .map(|position| position.line() as usize)
                    .unwrap_or_default();
                batch
                    .rejects
                    .push(RowError::new(line, None, format!("unreadable record: {err}")));
                continue;
            }
        };

        let line = record
            .position()
            .map(|position| position.line() as usize)
            .unwrap_or_default();

        let mut fields = BTreeMap::new();
        for (name, value) in header_names.iter().zip(record.iter()) {
            fields.insert(name.clone(), value.to_string());
        }

        match normalize_row(RawAppointmentRow::new(fields), line, date_delimiter) {
            Ok(appointment) => batch.appointments.push(appointment),
            Err(reject) => batch.rejects.push(reject),
        }
    }

    Ok(batch)
}

fn normalize_row(
    row: RawAppointmentRow,
    line: usize,
    date_delimiter: char,
) -> Result<NormalizedAppointment, RowError> {
    for column in columns::REQUIRED {
        if row.field(column).is_none() {
            return Err(RowError::new(line, Some(column), "missing required field"));
        }
    }

    let occurs_at = parse_occurs_at(
        row.field_or_empty(columns::DATE),
        row.field_or_empty(columns::START_TIME),
        date_delimiter,
        line,
    )?;

    if row.field_or_empty(columns::MEETING_POINT_NAME).trim().is_empty() {
        return Err(RowError::new(
            line,
            Some(columns::MEETING_POINT_NAME),
            "meeting point name is empty",
        ));
    }

    Ok(NormalizedAppointment {
        row,
        occurs_at,
        line,
    })
}

fn parse_occurs_at(
    date: &str,
    start_time: &str,
    delimiter: char,
    line: usize,
) -> Result<NaiveDateTime, RowError> {
    let date_format = format!("%d{delimiter}%m{delimiter}%Y");
    let day = NaiveDate::parse_from_str(date.trim(), &date_format).map_err(|err| {
        RowError::new(
            line,
            Some(columns::DATE),
            format!("invalid date '{}': {err}", date.trim()),
        )
    })?;
    let time = NaiveTime::parse_from_str(start_time.trim(), "%H:%M").map_err(|err| {
        RowError::new(
            line,
            Some(columns::START_TIME),
            format!("invalid start time '{}': {err}", start_time.trim()),
        )
    })?;
    Ok(day.and_time(time))
}
