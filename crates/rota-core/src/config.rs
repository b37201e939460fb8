use chrono::NaiveTime;

use crate::error::{PipelineError, Result};

/// Grid parameters for one run. Built by the caller and passed by reference
/// into the pipeline; nothing reads configuration from ambient state.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub slot_length_minutes: u32,
    pub day_start: NaiveTime,
    pub day_end: NaiveTime,
    /// Separator inside the input `date` field (day, month, year order is
    /// fixed).
    pub date_delimiter: char,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            slot_length_minutes: 20,
            day_start: NaiveTime::from_hms_opt(9, 0, 0).expect("valid constant time"),
            day_end: NaiveTime::from_hms_opt(18, 0, 0).expect("valid constant time"),
            date_delimiter: '/',
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.slot_length_minutes == 0 {
            return Err(PipelineError::Validation(
                "slot length must be at least one minute".to_string(),
            ));
        }
        if self.day_end <= self.day_start {
            return Err(PipelineError::Validation(format!(
                "day end {} must fall after day start {}",
                self.day_end.format("%H:%M"),
                self.day_start.format("%H:%M"),
            )));
        }
        // The delimiter is spliced into a strftime pattern; '%' and digits
        // would corrupt it.
        if self.date_delimiter == '%' || self.date_delimiter.is_ascii_digit() {
            return Err(PipelineError::Validation(format!(
                "'{}' cannot be used as a date delimiter",
                self.date_delimiter,
            )));
        }
        Ok(())
    }
}
