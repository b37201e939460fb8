use std::io::{Cursor, Write};

use chrono::Weekday;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::padding::PaddedSchedule;
use crate::partition::weekday_label;
use crate::render::render_schedule;

/// One serialized sheet, named and ready for archiving.
#[derive(Debug, Clone)]
pub struct ScheduleFile {
    pub name: String,
    pub contents: String,
}

/// `{weekday}-{location}.csv`, lowercased, every space in the location
/// replaced by an underscore.
pub fn schedule_filename(weekday: Weekday, location: &str) -> String {
    let slug = location.to_lowercase().replace(' ', "_");
    format!("{}-{}.csv", weekday_label(weekday), slug)
}

pub fn build_schedule_file(schedule: &PaddedSchedule) -> ScheduleFile {
    ScheduleFile {
        name: schedule_filename(schedule.weekday, &schedule.location),
        contents: render_schedule(schedule),
    }
}

/// Bundles the sheets into an in-memory ZIP archive, one entry per sheet.
/// An empty file list yields a valid archive with zero entries.
pub fn build_archive(files: &[ScheduleFile]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let mut zip = ZipWriter::new(&mut cursor);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for file in files {
            zip.start_file(file.name.as_str(), options)?;
            zip.write_all(file.contents.as_bytes())?;
        }

        zip.finish()?;
    }
    Ok(buffer)
}
