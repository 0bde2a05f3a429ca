// Ports define what the case workflow needs from the outside world, without implementing it.
//
// Purpose
// - Describe the three logical tables (cases, movements, time_in_area) and the
//   attachment bucket as async traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
//
// Testing guidance
// - In memory implementations live in adapters::outbound and can be switched
//   offline (or unprovisioned) to exercise failure paths.

use crate::modules::cases::core::case::{Case, CaseCode, DocumentRef};
use crate::modules::cases::core::movement::{Movement, NewMovement};
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::core::time_in_area::{NewInterval, TimeInArea};
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

/// Change of custody applied to a stored case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingUpdate {
    pub current_area: String,
    pub state: CaseState,
    pub updated_at: i64,
    /// When set, the update only applies if the stored version still matches.
    pub expected_version: Option<i64>,
}

#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Fails with `StoreError::Duplicate` when the code is already taken.
    async fn insert(&self, case: Case) -> Result<Case, StoreError>;
    async fn get(&self, code: &CaseCode) -> Result<Option<Case>, StoreError>;
    async fn update_routing(&self, code: &CaseCode, update: RoutingUpdate) -> Result<Case, StoreError>;
    /// Records the uploaded document on the case. Leaves the version alone.
    async fn attach_document(&self, code: &CaseCode, document: DocumentRef) -> Result<Case, StoreError>;
}

#[async_trait]
pub trait MovementLedger: Send + Sync {
    async fn append(&self, movement: NewMovement) -> Result<Movement, StoreError>;
    /// Most recent first.
    async fn list_by_case(&self, code: &CaseCode) -> Result<Vec<Movement>, StoreError>;
}

#[async_trait]
pub trait TimeInAreaRepository: Send + Sync {
    async fn insert(&self, interval: NewInterval) -> Result<TimeInArea, StoreError>;
    /// Sets `exited_at` on every open row of the case. Returns how many rows changed.
    async fn close_open(&self, code: &CaseCode, exited_at: i64) -> Result<u64, StoreError>;
    /// Most recently entered open row, if any.
    async fn find_open(&self, code: &CaseCode) -> Result<Option<TimeInArea>, StoreError>;
    /// Entry time ascending.
    async fn list_for_case(&self, code: &CaseCode) -> Result<Vec<TimeInArea>, StoreError>;
}

#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Stores the bytes under `path` and returns the public url.
    async fn upload(&self, path: &str, content: &[u8]) -> Result<String, StoreError>;
}
