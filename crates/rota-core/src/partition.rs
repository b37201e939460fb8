use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use rota_parser::NormalizedAppointment;

/// Fixed Sunday-first traversal order for day buckets. Output ordering
/// follows this array, never a hash map's iteration order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "sunday",
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
    }
}

/// All appointments sharing one (weekday, meeting point) pair, sorted
/// ascending by start-time text. Never empty: groups only exist because at
/// least one appointment landed in them.
#[derive(Debug, Clone)]
pub struct LocationSeries {
    pub weekday: Weekday,
    pub location: String,
    /// Calendar date of the first appointment after sorting; the padding
    /// grid runs on this date.
    pub date: NaiveDate,
    pub appointments: Vec<NormalizedAppointment>,
}

/// Buckets appointments by weekday, then by meeting point within each day.
/// Days and locations with no appointments are skipped entirely. The sort
/// compares start-time text and is stable, so equal start times keep their
/// input order.
pub fn partition_appointments(appointments: Vec<NormalizedAppointment>) -> Vec<LocationSeries> {
    let mut by_day: BTreeMap<u32, Vec<NormalizedAppointment>> = BTreeMap::new();
    for appointment in appointments {
        by_day
            .entry(appointment.weekday().num_days_from_sunday())
            .or_default()
            .push(appointment);
    }

    let mut series = Vec::new();
    for weekday in WEEKDAYS {
        let Some(day_bucket) = by_day.remove(&weekday.num_days_from_sunday()) else {
            continue;
        };

        let mut by_location: BTreeMap<String, Vec<NormalizedAppointment>> = BTreeMap::new();
        for appointment in day_bucket {
            by_location
                .entry(appointment.meeting_point().to_string())
                .or_default()
                .push(appointment);
        }

        for (location, mut bucket) in by_location {
            bucket.sort_by(|a, b| a.start_time().cmp(b.start_time()));
            let date = bucket[0].occurs_at.date();
            series.push(LocationSeries {
                weekday,
                location,
                date,
                appointments: bucket,
            });
        }
    }

    series
}
