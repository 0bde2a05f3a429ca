use crate::modules::cases::core::case::Case;
use crate::modules::cases::core::state::CaseState;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;
use serde::Serialize;

/// Store-level filter. All present criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    pub state: Option<CaseState>,
    /// Area the caller asked for.
    pub area: Option<String>,
    /// Area the caller is confined to.
    pub visible_area: Option<String>,
    /// Case-insensitive substring over title, sender, code and external reference.
    pub search: Option<String>,
    pub hide_completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CasePage {
    pub items: Vec<Case>,
    /// Matches before pagination.
    pub total: u64,
}

impl CasePage {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[async_trait]
pub trait CaseQueries: Send + Sync {
    /// Newest cases first.
    async fn search(&self, filter: &CaseFilter, page: Page) -> Result<CasePage, StoreError>;
}
