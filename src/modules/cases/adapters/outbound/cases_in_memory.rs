// In memory case table.
//
// Purpose
// - Exercise the workflow and the listing façade without a database.
//
// Responsibilities
// - Enforce code uniqueness on insert.
// - Apply routing updates, optionally conditioned on the stored version.
// - Answer filtered, paginated searches.

use crate::modules::cases::core::case::{Case, CaseCode, DocumentRef};
use crate::modules::cases::core::ports::{CaseRepository, RoutingUpdate};
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::list_cases::queries_port::{CaseFilter, CasePage, CaseQueries, Page};
use crate::shared::infrastructure::store::StoreError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCases {
    rows: RwLock<HashMap<CaseCode, Case>>,
    delay_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryCases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Slow every call down, to exercise store deadlines.
    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    async fn guard(&self) -> Result<(), StoreError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline {
            return Err(StoreError::Unavailable("Cases repository offline".into()));
        }
        Ok(())
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn matches(case: &Case, filter: &CaseFilter) -> bool {
    if let Some(state) = filter.state {
        if case.state != state {
            return false;
        }
    }
    if filter.hide_completed && case.state == CaseState::Completado {
        return false;
    }
    if let Some(area) = &filter.area {
        if &case.current_area != area {
            return false;
        }
    }
    if let Some(area) = &filter.visible_area {
        if &case.current_area != area {
            return false;
        }
    }
    match filter.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => {
            let term = term.to_lowercase();
            contains_ignore_case(&case.title, &term)
                || contains_ignore_case(&case.sender_name, &term)
                || contains_ignore_case(case.code.as_str(), &term)
                || case
                    .external_ref
                    .as_deref()
                    .is_some_and(|reference| contains_ignore_case(reference, &term))
        }
        _ => true,
    }
}

#[async_trait::async_trait]
impl CaseRepository for InMemoryCases {
    async fn insert(&self, case: Case) -> Result<Case, StoreError> {
        self.guard().await?;
        let mut rows = self.rows.write().await;
        if rows.contains_key(&case.code) {
            return Err(StoreError::Duplicate(case.code.to_string()));
        }
        rows.insert(case.code.clone(), case.clone());
        Ok(case)
    }

    async fn get(&self, code: &CaseCode) -> Result<Option<Case>, StoreError> {
        self.guard().await?;
        Ok(self.rows.read().await.get(code).cloned())
    }

    async fn update_routing(&self, code: &CaseCode, update: RoutingUpdate) -> Result<Case, StoreError> {
        self.guard().await?;
        let mut rows = self.rows.write().await;
        let case = rows
            .get_mut(code)
            .ok_or_else(|| StoreError::NotFound(code.to_string()))?;
        if let Some(expected) = update.expected_version {
            if case.version != expected {
                return Err(StoreError::VersionMismatch {
                    expected,
                    actual: case.version,
                });
            }
        }
        case.current_area = update.current_area;
        case.state = update.state;
        case.updated_at = update.updated_at;
        case.version += 1;
        Ok(case.clone())
    }

    async fn attach_document(&self, code: &CaseCode, document: DocumentRef) -> Result<Case, StoreError> {
        self.guard().await?;
        let mut rows = self.rows.write().await;
        let case = rows
            .get_mut(code)
            .ok_or_else(|| StoreError::NotFound(code.to_string()))?;
        case.attachment = Some(document);
        Ok(case.clone())
    }
}

#[async_trait::async_trait]
impl CaseQueries for InMemoryCases {
    async fn search(&self, filter: &CaseFilter, page: Page) -> Result<CasePage, StoreError> {
        self.guard().await?;
        let rows = self.rows.read().await;

        let mut items: Vec<Case> = rows.values().filter(|case| matches(case, filter)).cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.code.cmp(&a.code)));

        let total = items.len() as u64;
        let start = (page.offset as usize).min(items.len());
        let end = start.saturating_add(page.limit as usize).min(items.len());
        Ok(CasePage {
            items: items[start..end].to_vec(),
            total,
        })
    }
}
