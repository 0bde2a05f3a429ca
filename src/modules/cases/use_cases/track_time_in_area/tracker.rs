// Dwell-time bookkeeping per case.
//
// Responsibilities
// - Open and close TimeInArea intervals as a case moves between areas.
// - Never block a transfer: callers treat every error from here as secondary.
//
// Failure policy
// - A missing time_in_area table turns every operation into a no-op or an empty
//   result, so deployments without SLA tracking keep working.

use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::ports::TimeInAreaRepository;
use crate::modules::cases::core::time_in_area::{NewInterval, TimeInArea};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::store::{StoreError, within};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub struct TimeInAreaTracker<TIntervals>
where
    TIntervals: TimeInAreaRepository + 'static,
{
    intervals: Arc<TIntervals>,
    clock: Arc<dyn Clock>,
    store_timeout: Duration,
}

fn unprovisioned_as<T>(result: Result<T, StoreError>, fallback: T) -> Result<T, StoreError> {
    match result {
        Err(StoreError::MissingTable(table)) => {
            tracing::debug!(%table, "time tracking table not provisioned, skipping");
            Ok(fallback)
        }
        other => other,
    }
}

impl<TIntervals> TimeInAreaTracker<TIntervals>
where
    TIntervals: TimeInAreaRepository + 'static,
{
    pub fn new(intervals: Arc<TIntervals>, clock: Arc<dyn Clock>, store_timeout: Duration) -> Self {
        Self {
            intervals,
            clock,
            store_timeout,
        }
    }

    /// Inserts an open interval. Does not look for an already open one; close first.
    pub async fn open_interval(
        &self,
        code: &CaseCode,
        area_name: &str,
        process_template: &str,
    ) -> Result<(), StoreError> {
        let interval = NewInterval {
            case_code: code.clone(),
            area_name: area_name.to_string(),
            process_template: process_template.to_string(),
            entered_at: self.clock.now_millis(),
        };
        let result = within(self.store_timeout, "open interval", self.intervals.insert(interval))
            .await
            .map(|_| ());
        unprovisioned_as(result, ())
    }

    /// Closes whatever interval is open for the case. No open interval is not an error.
    pub async fn close_current_interval(&self, code: &CaseCode) -> Result<(), StoreError> {
        let now = self.clock.now_millis();
        let result = within(self.store_timeout, "close interval", self.intervals.close_open(code, now)).await;
        let closed = unprovisioned_as(result, 0)?;
        if closed > 1 {
            tracing::warn!(case = %code, closed, "more than one open interval was closed");
        }
        Ok(())
    }

    pub async fn current_open_interval(&self, code: &CaseCode) -> Result<Option<TimeInArea>, StoreError> {
        let result = within(self.store_timeout, "find open interval", self.intervals.find_open(code)).await;
        unprovisioned_as(result, None)
    }

    pub async fn current_open_intervals(
        &self,
        codes: &[CaseCode],
    ) -> Result<HashMap<CaseCode, Option<TimeInArea>>, StoreError> {
        let mut current = HashMap::with_capacity(codes.len());
        for code in codes {
            current.insert(code.clone(), self.current_open_interval(code).await?);
        }
        Ok(current)
    }

    /// Every interval of the case, oldest entry first.
    pub async fn all_intervals(&self, code: &CaseCode) -> Result<Vec<TimeInArea>, StoreError> {
        let result = within(self.store_timeout, "list intervals", self.intervals.list_for_case(code)).await;
        unprovisioned_as(result, Vec::new())
    }
}
