use std::io::{Cursor, Read};

use chrono::Weekday;
use rota_core::archive::{build_archive, schedule_filename, ScheduleFile};
use zip::ZipArchive;

fn sheet(name: &str, contents: &str) -> ScheduleFile {
    ScheduleFile {
        name: name.to_string(),
        contents: contents.to_string(),
    }
}

#[test]
fn filenames_are_lowercased_and_underscored() {
    assert_eq!(schedule_filename(Weekday::Mon, "Room A"), "monday-room_a.csv");
    assert_eq!(
        schedule_filename(Weekday::Wed, "Main Hall"),
        "wednesday-main_hall.csv"
    );
    assert_eq!(
        schedule_filename(Weekday::Fri, "Main Lecture Hall"),
        "friday-main_lecture_hall.csv"
    );
    assert_eq!(schedule_filename(Weekday::Sun, "ROOM B"), "sunday-room_b.csv");
}

#[test]
fn archive_holds_one_entry_per_sheet() {
    let files = vec![
        sheet("monday-room_a.csv", "Room A\nMonday, 01 May 2023\n"),
        sheet("tuesday-main_hall.csv", "Main Hall\nTuesday, 02 May 2023\n"),
    ];
    let bytes = build_archive(&files).expect("archive build failed");

    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("archive did not reopen");
    assert_eq!(archive.len(), 2);

    let mut contents = String::new();
    archive
        .by_name("monday-room_a.csv")
        .expect("missing monday entry")
        .read_to_string(&mut contents)
        .expect("entry read failed");
    assert_eq!(contents, "Room A\nMonday, 01 May 2023\n");
}

#[test]
fn entry_bytes_match_sheet_text_exactly() {
    let text = "Main Hall\nTuesday, 02 May 2023\n\nstart_time, end_time\n";
    let bytes =
        build_archive(&[sheet("tuesday-main_hall.csv", text)]).expect("archive build failed");

    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("archive did not reopen");
    let mut entry = archive
        .by_name("tuesday-main_hall.csv")
        .expect("missing entry");
    let mut restored = Vec::new();
    entry.read_to_end(&mut restored).expect("entry read failed");

    assert_eq!(restored, text.as_bytes());
}

#[test]
fn no_sheets_still_builds_a_valid_archive() {
    let bytes = build_archive(&[]).expect("archive build failed");

    let archive = ZipArchive::new(Cursor::new(bytes)).expect("archive did not reopen");
    assert_eq!(archive.len(), 0);
}
