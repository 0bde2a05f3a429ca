use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::ports::{CaseRepository, TimeInAreaRepository};
use crate::modules::cases::use_cases::errors::ApplicationError;
use crate::modules::cases::use_cases::settings::WorkflowSettings;
use crate::modules::cases::use_cases::track_time_in_area::report::{CurrentDwell, DwellReport, build_report, current_dwell};
use crate::modules::cases::use_cases::track_time_in_area::tracker::TimeInAreaTracker;
use crate::shared::infrastructure::store::within;
use std::collections::HashMap;
use std::sync::Arc;

pub struct DwellReportHandler<TCases, TIntervals>
where
    TCases: CaseRepository + 'static,
    TIntervals: TimeInAreaRepository + 'static,
{
    cases: Arc<TCases>,
    tracker: TimeInAreaTracker<TIntervals>,
    settings: WorkflowSettings,
}

impl<TCases, TIntervals> DwellReportHandler<TCases, TIntervals>
where
    TCases: CaseRepository + 'static,
    TIntervals: TimeInAreaRepository + 'static,
{
    pub fn new(cases: Arc<TCases>, intervals: Arc<TIntervals>, settings: WorkflowSettings) -> Self {
        let tracker = TimeInAreaTracker::new(intervals, settings.clock.clone(), settings.store_timeout);
        Self {
            cases,
            tracker,
            settings,
        }
    }

    pub async fn handle(&self, code: &CaseCode) -> Result<DwellReport, ApplicationError> {
        let case = within(self.settings.store_timeout, "load case", self.cases.get(code))
            .await?
            .ok_or_else(|| ApplicationError::NotFound(code.to_string()))?;
        let intervals = self.tracker.all_intervals(code).await?;
        Ok(build_report(
            &case,
            &intervals,
            &self.settings.processes,
            self.settings.clock.now_millis(),
        ))
    }

    /// Current stay of each case, for listings. Cases without an open interval map to None.
    pub async fn current_stays(
        &self,
        codes: &[CaseCode],
    ) -> Result<HashMap<CaseCode, Option<CurrentDwell>>, ApplicationError> {
        let now = self.settings.clock.now_millis();
        let open = self.tracker.current_open_intervals(codes).await?;
        Ok(open
            .into_iter()
            .map(|(code, interval)| {
                let stay = interval.map(|i| current_dwell(&i, &self.settings.processes, now));
                (code, stay)
            })
            .collect())
    }
}

#[cfg(test)]
mod dwell_report_handler_tests {
    use super::*;
    use crate::modules::cases::adapters::outbound::cases_in_memory::InMemoryCases;
    use crate::modules::cases::adapters::outbound::time_in_area_in_memory::InMemoryTimeInArea;
    use crate::modules::cases::core::process_templates::SlaLevel;
    use crate::tests::fixtures::cases::CaseBuilder;
    use crate::tests::fixtures::settings::test_settings;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_unknown_cases() {
        let (settings, _) = test_settings();
        let handler = DwellReportHandler::new(
            Arc::new(InMemoryCases::new()),
            Arc::new(InMemoryTimeInArea::new()),
            settings,
        );
        let result = handler.handle(&CaseCode::new("NOPE-000000")).await;
        assert!(matches!(result, Err(ApplicationError::NotFound(code)) if code == "NOPE-000000"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_the_current_stay() {
        let (settings, clock) = test_settings();
        let cases = Arc::new(InMemoryCases::new());
        let intervals = Arc::new(InMemoryTimeInArea::new());
        let case = CaseBuilder::new()
            .code("JURI-000001")
            .process_template(Some("proceso_1"))
            .build();
        cases.insert(case.clone()).await.unwrap();
        let tracker = TimeInAreaTracker::new(intervals.clone(), clock.clone(), settings.store_timeout);
        tracker
            .open_interval(&case.code, "Departamento Jurídico", "proceso_1")
            .await
            .unwrap();
        clock.advance_days(17);

        let handler = DwellReportHandler::new(cases, intervals, settings);
        let report = handler.handle(&case.code).await.unwrap();
        let current = report.current.expect("current stay");
        assert_eq!(current.area, "Departamento Jurídico");
        assert_eq!(current.level, SlaLevel::Warning);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_empty_history_when_tracking_is_not_provisioned() {
        let (settings, _) = test_settings();
        let cases = Arc::new(InMemoryCases::new());
        let mut intervals = InMemoryTimeInArea::new();
        intervals.toggle_unprovisioned();
        let case = CaseBuilder::new().code("JURI-000001").build();
        cases.insert(case.clone()).await.unwrap();

        let handler = DwellReportHandler::new(cases, Arc::new(intervals), settings);
        let report = handler.handle(&case.code).await.unwrap();
        assert_eq!(report.current, None);
        assert!(report.per_area.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_grade_the_current_stay_of_several_cases() {
        let (settings, clock) = test_settings();
        let intervals = Arc::new(InMemoryTimeInArea::new());
        let tracker = TimeInAreaTracker::new(intervals.clone(), clock.clone(), settings.store_timeout);
        let tracked = CaseCode::new("JURI-000001");
        let untracked = CaseCode::new("JURI-000002");
        tracker
            .open_interval(&tracked, "Departamento Jurídico", "proceso_1")
            .await
            .unwrap();
        clock.advance_days(10);

        let handler = DwellReportHandler::new(Arc::new(InMemoryCases::new()), intervals, settings);
        let stays = handler.current_stays(&[tracked.clone(), untracked.clone()]).await.unwrap();
        assert_eq!(stays.len(), 2);
        assert_eq!(stays[&untracked], None);
        let stay = stays[&tracked].as_ref().expect("open stay");
        assert_eq!(stay.percent_elapsed, Some(50.0));
        assert_eq!(stay.level, SlaLevel::OnTrack);
    }
}
