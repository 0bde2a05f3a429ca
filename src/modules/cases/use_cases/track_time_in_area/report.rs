// Dwell report: how long a case has spent in each area, and how the current stay
// compares to the maximum its process template allows.

use crate::modules::cases::core::case::Case;
use crate::modules::cases::core::process_templates::{ProcessCatalog, SlaLevel, percent_elapsed};
use crate::modules::cases::core::time_in_area::TimeInArea;
use crate::shared::core::clock::MILLIS_PER_DAY;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaDwell {
    pub area: String,
    pub visits: u32,
    pub total_millis: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentDwell {
    pub area: String,
    pub entered_at: i64,
    pub elapsed_days: f64,
    pub max_days: Option<u32>,
    pub percent_elapsed: Option<f64>,
    pub level: SlaLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DwellReport {
    pub case_code: String,
    pub process_template: Option<String>,
    pub current: Option<CurrentDwell>,
    /// In order of first entry.
    pub per_area: Vec<AreaDwell>,
}

/// Grades an open interval against the template's limit for its area.
pub fn current_dwell(open: &TimeInArea, processes: &ProcessCatalog, now: i64) -> CurrentDwell {
    let elapsed = open.dwell_millis(now);
    let max_days = processes.max_days(&open.process_template, &open.area_name);
    let percent = percent_elapsed(elapsed, max_days);
    CurrentDwell {
        area: open.area_name.clone(),
        entered_at: open.entered_at,
        elapsed_days: elapsed as f64 / MILLIS_PER_DAY as f64,
        max_days,
        percent_elapsed: percent,
        level: SlaLevel::from_percent(percent),
    }
}

pub fn build_report(case: &Case, intervals: &[TimeInArea], processes: &ProcessCatalog, now: i64) -> DwellReport {
    let mut per_area: Vec<AreaDwell> = Vec::new();
    for interval in intervals {
        let dwell = interval.dwell_millis(now);
        match per_area.iter_mut().find(|a| a.area == interval.area_name) {
            Some(existing) => {
                existing.visits += 1;
                existing.total_millis += dwell;
            }
            None => per_area.push(AreaDwell {
                area: interval.area_name.clone(),
                visits: 1,
                total_millis: dwell,
            }),
        }
    }

    let current = intervals
        .iter()
        .filter(|i| i.is_open())
        .max_by_key(|i| (i.entered_at, i.id))
        .map(|open| current_dwell(open, processes, now));

    DwellReport {
        case_code: case.code.to_string(),
        process_template: case.process_template.clone(),
        current,
        per_area,
    }
}
