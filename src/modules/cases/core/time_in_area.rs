use crate::modules::cases::core::case::CaseCode;
use serde::{Deserialize, Serialize};

/// Span during which a case sat in one area. `exited_at == None` means still there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInArea {
    pub id: i64,
    pub case_code: CaseCode,
    pub area_name: String,
    pub process_template: String,
    pub entered_at: i64,
    pub exited_at: Option<i64>,
}

impl TimeInArea {
    pub fn is_open(&self) -> bool {
        self.exited_at.is_none()
    }

    /// Milliseconds spent in the area, measured up to `now` while still open.
    pub fn dwell_millis(&self, now: i64) -> i64 {
        (self.exited_at.unwrap_or(now) - self.entered_at).max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterval {
    pub case_code: CaseCode,
    pub area_name: String,
    pub process_template: String,
    pub entered_at: i64,
}

impl NewInterval {
    pub fn into_interval(self, id: i64) -> TimeInArea {
        TimeInArea {
            id,
            case_code: self.case_code,
            area_name: self.area_name,
            process_template: self.process_template,
            entered_at: self.entered_at,
            exited_at: None,
        }
    }
}
