use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::state::CaseState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCase {
    pub code: CaseCode,
    /// Blank means "wherever the case is now".
    pub origin_area: String,
    pub destination_area: String,
    pub external_ref: String,
    pub acting_user: String,
    pub notes: Option<String>,
    pub next_state: Option<CaseState>,
    /// Opt-in optimistic check against `Case::version`.
    pub expected_version: Option<i64>,
}
