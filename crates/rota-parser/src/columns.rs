pub const DATE: &str = "date";
pub const START_TIME: &str = "start_time";
pub const END_TIME: &str = "end_time";
pub const ATTENDEE_NAME: &str = "attendee_name";
pub const ATTENDEE_ORGANISATION: &str = "attendee_organisation";
pub const BOOKER_NAME: &str = "booker_name";
pub const BOOKER_ORGANISATION: &str = "booker_organisation";
pub const MEETING_POINT_NAME: &str = "meeting_point_name";
pub const ALSO_ATTENDING: &str = "also_attending";

/// Header names every input file must carry. Extra columns are allowed and
/// ride along untouched until sanitization.
pub const REQUIRED: [&str; 9] = [
    DATE,
    START_TIME,
    END_TIME,
    ATTENDEE_NAME,
    ATTENDEE_ORGANISATION,
    BOOKER_NAME,
    BOOKER_ORGANISATION,
    MEETING_POINT_NAME,
    ALSO_ATTENDING,
];
