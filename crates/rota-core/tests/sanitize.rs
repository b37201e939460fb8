use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rota_core::sanitize::{sanitize_appointment, INTERNAL_COLUMNS};
use rota_parser::{columns, NormalizedAppointment, RawAppointmentRow};

fn loaded_appointment() -> NormalizedAppointment {
    let mut fields = BTreeMap::new();
    for column in columns::REQUIRED {
        fields.insert(column.to_string(), format!("value for {column}"));
    }
    fields.insert("booking_reference".to_string(), "BK-1001".to_string());
    fields.insert("attendee_email".to_string(), "alice@example.com".to_string());
    fields.insert("created_at".to_string(), "2023-04-28T10:00:00Z".to_string());
    fields.insert("notes".to_string(), "wheelchair access".to_string());

    NormalizedAppointment {
        row: RawAppointmentRow::new(fields),
        occurs_at: NaiveDateTime::parse_from_str("2023-05-01 09:00", "%Y-%m-%d %H:%M")
            .expect("bad test timestamp"),
        line: 2,
    }
}

#[test]
fn strips_internal_columns_only() {
    let sanitized = sanitize_appointment(&loaded_appointment());

    for column in INTERNAL_COLUMNS {
        assert_eq!(sanitized.row.field(column), None, "column {column} survived");
    }
    assert_eq!(sanitized.row.field("notes"), Some("wheelchair access"));
}

#[test]
fn keeps_every_required_column() {
    let sanitized = sanitize_appointment(&loaded_appointment());

    for column in columns::REQUIRED {
        assert!(
            sanitized.row.field(column).is_some(),
            "column {column} went missing"
        );
    }
}

#[test]
fn source_appointment_is_untouched() {
    let source = loaded_appointment();
    let _ = sanitize_appointment(&source);

    assert_eq!(source.row.field("booking_reference"), Some("BK-1001"));
    assert_eq!(source.row.field("attendee_email"), Some("alice@example.com"));
}

#[test]
fn sanitizing_twice_changes_nothing() {
    let once = sanitize_appointment(&loaded_appointment());
    let twice = sanitize_appointment(&once);

    assert_eq!(once, twice);
}

#[test]
fn carries_timestamp_and_line_through() {
    let source = loaded_appointment();
    let sanitized = sanitize_appointment(&source);

    assert_eq!(sanitized.occurs_at, source.occurs_at);
    assert_eq!(sanitized.line, source.line);
}
