use rota_parser::{NormalizedAppointment, RawAppointmentRow};

/// Columns that never reach an output sheet. Everything else a row carries
/// passes through untouched.
pub const INTERNAL_COLUMNS: [&str; 8] = [
    "id",
    "booking_reference",
    "attendee_email",
    "booker_email",
    "created_at",
    "updated_at",
    "confirmed_at",
    "cancelled_at",
];

/// Builds an output-ready copy of an appointment with the internal columns
/// removed. The source appointment is left untouched.
pub fn sanitize_appointment(appointment: &NormalizedAppointment) -> NormalizedAppointment {
    let fields = appointment
        .row
        .fields()
        .iter()
        .filter(|(name, _)| !INTERNAL_COLUMNS.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    NormalizedAppointment {
        row: RawAppointmentRow::new(fields),
        occurs_at: appointment.occurs_at,
        line: appointment.line,
    }
}
