use crate::modules::cases::core::session::{Session, Visibility};
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::errors::ApplicationError;
use crate::modules::cases::use_cases::list_cases::queries_port::{CaseFilter, CasePage, CaseQueries, Page};
use crate::shared::infrastructure::store::within;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCases {
    pub state: Option<CaseState>,
    pub area: Option<String>,
    pub search: Option<String>,
    pub hide_completed: bool,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub struct ListCasesHandler<TQueries>
where
    TQueries: CaseQueries + 'static,
{
    queries: Arc<TQueries>,
    store_timeout: Duration,
}

impl<TQueries> ListCasesHandler<TQueries>
where
    TQueries: CaseQueries + 'static,
{
    pub fn new(queries: Arc<TQueries>, store_timeout: Duration) -> Self {
        Self {
            queries,
            store_timeout,
        }
    }

    pub async fn handle(&self, session: &Session, request: ListCases) -> Result<CasePage, ApplicationError> {
        let visible_area = match session.visibility() {
            Visibility::Everything => None,
            Visibility::Area(area) => Some(area.to_string()),
            Visibility::Nothing => {
                tracing::debug!(user = %session.display_name, "caller has no area, listing nothing");
                return Ok(CasePage::empty());
            }
        };

        let filter = CaseFilter {
            state: request.state,
            area: request.area.filter(|a| !a.trim().is_empty()),
            visible_area,
            search: request.search.filter(|s| !s.trim().is_empty()),
            hide_completed: request.hide_completed,
        };
        let page = Page {
            offset: request.offset.unwrap_or(0),
            limit: request.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
        };

        let result = within(self.store_timeout, "search cases", self.queries.search(&filter, page)).await?;
        Ok(result)
    }
}
