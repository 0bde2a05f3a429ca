// Read side of a single case: the stored row, its movement ledger, and a check
// that replaying the ledger lands where the row says the case is.

use crate::modules::cases::core::case::{Case, CaseCode};
use crate::modules::cases::core::evolve::{RoutingPosition, replay};
use crate::modules::cases::core::movement::Movement;
use crate::modules::cases::core::ports::{CaseRepository, MovementLedger};
use crate::modules::cases::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::store::within;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseHistory {
    pub case: Case,
    /// Most recent first.
    pub movements: Vec<Movement>,
    pub replayed: Option<RoutingPosition>,
    /// False when the ledger disagrees with the stored row.
    pub consistent: bool,
}

pub struct CaseHistoryHandler<TCases, TLedger>
where
    TCases: CaseRepository + 'static,
    TLedger: MovementLedger + 'static,
{
    cases: Arc<TCases>,
    ledger: Arc<TLedger>,
    store_timeout: Duration,
}

impl<TCases, TLedger> CaseHistoryHandler<TCases, TLedger>
where
    TCases: CaseRepository + 'static,
    TLedger: MovementLedger + 'static,
{
    pub fn new(cases: Arc<TCases>, ledger: Arc<TLedger>, store_timeout: Duration) -> Self {
        Self {
            cases,
            ledger,
            store_timeout,
        }
    }

    pub async fn find(&self, code: &CaseCode) -> Result<Case, ApplicationError> {
        within(self.store_timeout, "load case", self.cases.get(code))
            .await?
            .ok_or_else(|| ApplicationError::NotFound(code.to_string()))
    }

    /// Ledger of a case. Unknown codes yield an empty list.
    pub async fn movements(&self, code: &CaseCode) -> Result<Vec<Movement>, ApplicationError> {
        let movements = within(self.store_timeout, "list movements", self.ledger.list_by_case(code)).await?;
        Ok(movements)
    }

    pub async fn history(&self, code: &CaseCode) -> Result<CaseHistory, ApplicationError> {
        let case = self.find(code).await?;
        let movements = self.movements(code).await?;
        let replayed = replay(&movements);
        let consistent = replayed
            .as_ref()
            .is_some_and(|p| p.area == case.current_area && p.state == case.state);
        if !consistent {
            tracing::warn!(case = %case.code, "movement ledger does not match the stored case");
        }
        Ok(CaseHistory {
            case,
            movements,
            replayed,
            consistent,
        })
    }
}
