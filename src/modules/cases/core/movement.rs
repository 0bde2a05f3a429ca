use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::state::CaseState;
use serde::{Deserialize, Serialize};

/// One recorded change of custody. Never edited once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: i64,
    pub case_code: CaseCode,
    pub origin_area: String,
    pub destination_area: String,
    pub external_ref: Option<String>,
    pub notes: Option<String>,
    pub acting_user: Option<String>,
    pub resulting_state: Option<CaseState>,
    pub occurred_at: i64,
}

/// Movement as submitted to the ledger, before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovement {
    pub case_code: CaseCode,
    pub origin_area: String,
    pub destination_area: String,
    pub external_ref: Option<String>,
    pub notes: Option<String>,
    pub acting_user: Option<String>,
    pub resulting_state: Option<CaseState>,
    pub occurred_at: i64,
}

impl NewMovement {
    pub fn into_movement(self, id: i64) -> Movement {
        Movement {
            id,
            case_code: self.case_code,
            origin_area: self.origin_area,
            destination_area: self.destination_area,
            external_ref: self.external_ref,
            notes: self.notes,
            acting_user: self.acting_user,
            resulting_state: self.resulting_state,
            occurred_at: self.occurred_at,
        }
    }
}
