use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::columns;

/// One input record, kept as an ordered field map so columns outside the
/// required set survive ingestion untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAppointmentRow {
    fields: BTreeMap<String, String>,
}

impl RawAppointmentRow {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Missing fields render as empty text downstream; this is the accessor
    /// serializers use.
    pub fn field_or_empty(&self, name: &str) -> &str {
        self.field(name).unwrap_or_default()
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

/// A raw row plus the absolute timestamp derived from its `date` and
/// `start_time` fields. Everything after ingestion works off `occurs_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAppointment {
    pub row: RawAppointmentRow,
    pub occurs_at: NaiveDateTime,
    /// 1-based source line, carried for reporting.
    pub line: usize,
}

impl NormalizedAppointment {
    pub fn weekday(&self) -> Weekday {
        self.occurs_at.weekday()
    }

    pub fn start_time(&self) -> &str {
        self.row.field_or_empty(columns::START_TIME)
    }

    pub fn meeting_point(&self) -> &str {
        self.row.field_or_empty(columns::MEETING_POINT_NAME)
    }
}
