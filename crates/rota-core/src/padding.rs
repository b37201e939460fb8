use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
use rota_parser::NormalizedAppointment;

use crate::config::ScheduleConfig;
use crate::partition::LocationSeries;
use crate::sanitize::sanitize_appointment;

/// One printable schedule slot: a booked appointment (already sanitized) or
/// a synthetic break filling an unbooked grid step.
#[derive(Debug, Clone)]
pub enum PaddedSlot {
    Appointment(NormalizedAppointment),
    Break {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// A fully padded (weekday, meeting point) sheet plus the appointments the
/// grid never matched.
#[derive(Debug)]
pub struct PaddedSchedule {
    pub weekday: Weekday,
    pub location: String,
    pub date: NaiveDate,
    pub slots: Vec<PaddedSlot>,
    /// Appointments left unconsumed when the grid reached day end: their
    /// timestamp fell outside the day window, or an earlier appointment had
    /// already claimed the slot. Reported, never silently discarded.
    pub unmatched: Vec<NormalizedAppointment>,
}

impl PaddedSchedule {
    pub fn appointment_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, PaddedSlot::Appointment(_)))
            .count()
    }
}

/// Walks the day grid from `day_start` (inclusive) to `day_end` (exclusive)
/// in `slot_length_minutes` steps. A slot is an appointment only when the
/// next unconsumed appointment starts exactly on the grid timestamp; the
/// cursor advances on nothing else. Every other slot becomes a break.
pub fn pad_series(series: LocationSeries, config: &ScheduleConfig) -> PaddedSchedule {
    let LocationSeries {
        weekday,
        location,
        date,
        appointments,
    } = series;

    let slot_length = Duration::minutes(i64::from(config.slot_length_minutes));
    let day_end = date.and_time(config.day_end);

    let mut slots = Vec::new();
    let mut pending = appointments.into_iter().peekable();
    let mut cursor = date.and_time(config.day_start);

    while cursor < day_end {
        let slot_end = cursor + slot_length;
        match pending.next_if(|appointment| appointment.occurs_at == cursor) {
            Some(appointment) => {
                slots.push(PaddedSlot::Appointment(sanitize_appointment(&appointment)));
            }
            None => {
                slots.push(PaddedSlot::Break {
                    start: cursor,
                    end: slot_end,
                });
            }
        }
        cursor = slot_end;
    }

    PaddedSchedule {
        weekday,
        location,
        date,
        slots,
        unmatched: pending.collect(),
    }
}
