// In memory movement ledger. Append only; ids come from a sequence like a serial column.

use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::movement::{Movement, NewMovement};
use crate::modules::cases::core::ports::MovementLedger;
use crate::shared::infrastructure::store::StoreError;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMovementLedger {
    rows: RwLock<Vec<Movement>>,
    last_id: AtomicI64,
    is_offline: bool,
}

impl InMemoryMovementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait::async_trait]
impl MovementLedger for InMemoryMovementLedger {
    async fn append(&self, movement: NewMovement) -> Result<Movement, StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Movement ledger offline".into()));
        }
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let movement = movement.into_movement(id);
        self.rows.write().await.push(movement.clone());
        Ok(movement)
    }

    async fn list_by_case(&self, code: &CaseCode) -> Result<Vec<Movement>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Movement ledger offline".into()));
        }
        let mut items: Vec<Movement> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|m| &m.case_code == code)
            .cloned()
            .collect();
        items.sort_by_key(|m| (m.occurred_at, m.id));
        items.reverse();
        Ok(items)
    }
}
