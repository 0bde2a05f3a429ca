// In memory time_in_area table.
//
// Can be marked unprovisioned to mimic deployments that never created the table.

use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::ports::TimeInAreaRepository;
use crate::modules::cases::core::time_in_area::{NewInterval, TimeInArea};
use crate::shared::infrastructure::store::StoreError;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

pub const TABLE_NAME: &str = "time_in_area";

#[derive(Default)]
pub struct InMemoryTimeInArea {
    rows: RwLock<Vec<TimeInArea>>,
    last_id: AtomicI64,
    is_offline: bool,
    is_unprovisioned: bool,
}

impl InMemoryTimeInArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn toggle_unprovisioned(&mut self) {
        self.is_unprovisioned = !self.is_unprovisioned;
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.is_unprovisioned {
            return Err(StoreError::MissingTable(TABLE_NAME.into()));
        }
        if self.is_offline {
            return Err(StoreError::Unavailable("Time in area repository offline".into()));
        }
        Ok(())
    }

    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait::async_trait]
impl TimeInAreaRepository for InMemoryTimeInArea {
    async fn insert(&self, interval: NewInterval) -> Result<TimeInArea, StoreError> {
        self.check()?;
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = interval.into_interval(id);
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn close_open(&self, code: &CaseCode, exited_at: i64) -> Result<u64, StoreError> {
        self.check()?;
        let mut rows = self.rows.write().await;
        let mut closed = 0;
        for row in rows.iter_mut().filter(|r| &r.case_code == code && r.is_open()) {
            row.exited_at = Some(exited_at);
            closed += 1;
        }
        Ok(closed)
    }

    async fn find_open(&self, code: &CaseCode) -> Result<Option<TimeInArea>, StoreError> {
        self.check()?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| &r.case_code == code && r.is_open())
            .max_by_key(|r| (r.entered_at, r.id))
            .cloned())
    }

    async fn list_for_case(&self, code: &CaseCode) -> Result<Vec<TimeInArea>, StoreError> {
        self.check()?;
        let mut items: Vec<TimeInArea> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| &r.case_code == code)
            .cloned()
            .collect();
        items.sort_by_key(|r| (r.entered_at, r.id));
        Ok(items)
    }
}
