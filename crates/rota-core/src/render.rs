use rota_parser::columns;

use crate::padding::{PaddedSchedule, PaddedSlot};

/// Column order of every output sheet.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    columns::START_TIME,
    columns::END_TIME,
    columns::ATTENDEE_NAME,
    columns::ATTENDEE_ORGANISATION,
    columns::BOOKER_NAME,
    columns::BOOKER_ORGANISATION,
    columns::MEETING_POINT_NAME,
    columns::ALSO_ATTENDING,
];

pub const BREAK_LABEL: &str = "Break";
const TIME_FORMAT: &str = "%H:%M";
const DATE_HEADING_FORMAT: &str = "%A, %d %B %Y";

/// Renders one sheet: location line, human-readable date line, blank line,
/// column-header line, then one comma-and-space separated row per slot.
pub fn render_schedule(schedule: &PaddedSchedule) -> String {
    let mut lines = Vec::with_capacity(schedule.slots.len() + 4);
    lines.push(schedule.location.clone());
    lines.push(schedule.date.format(DATE_HEADING_FORMAT).to_string());
    lines.push(String::new());
    lines.push(OUTPUT_COLUMNS.join(", "));

    for slot in &schedule.slots {
        lines.push(render_slot(slot, &schedule.location));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn render_slot(slot: &PaddedSlot, location: &str) -> String {
    match slot {
        PaddedSlot::Appointment(appointment) => OUTPUT_COLUMNS
            .iter()
            .map(|column| appointment.row.field_or_empty(column))
            .collect::<Vec<_>>()
            .join(", "),
        PaddedSlot::Break { start, end } => [
            start.format(TIME_FORMAT).to_string(),
            end.format(TIME_FORMAT).to_string(),
            BREAK_LABEL.to_string(),
            String::new(),
            BREAK_LABEL.to_string(),
            String::new(),
            location.to_string(),
            String::new(),
        ]
        .join(", "),
    }
}
