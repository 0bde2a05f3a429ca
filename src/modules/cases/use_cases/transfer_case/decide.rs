use crate::modules::cases::core::areas::AreaCatalog;
use crate::modules::cases::core::case::Case;
use crate::modules::cases::core::state::{CaseState, TransitionPolicy, validate_transition};
use crate::modules::cases::use_cases::errors::{ValidationError, require};
use crate::modules::cases::use_cases::transfer_case::command::TransferCase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub origin_area: String,
    pub resulting_state: CaseState,
}

impl TransferPlan {
    /// A completed case leaves no open interval behind.
    pub fn opens_interval(&self) -> bool {
        self.resulting_state != CaseState::Completado
    }
}

/// Checks that need no stored data. Runs before the case is loaded.
pub fn validate_transfer(command: &TransferCase, areas: &AreaCatalog) -> Result<(), ValidationError> {
    require(command.code.as_str(), "code")?;
    require(&command.destination_area, "destination_area")?;
    require(&command.acting_user, "acting_user")?;
    require(&command.external_ref, "external_ref")?;
    if !areas.contains(&command.destination_area) {
        return Err(ValidationError::UnknownArea(command.destination_area.clone()));
    }
    Ok(())
}

pub fn decide_transfer(
    case: &Case,
    command: &TransferCase,
    policy: TransitionPolicy,
) -> Result<TransferPlan, ValidationError> {
    let resulting_state = command.next_state.unwrap_or(case.state);
    validate_transition(case.state, resulting_state, policy)?;

    let origin_area = if command.origin_area.trim().is_empty() {
        case.current_area.clone()
    } else {
        command.origin_area.clone()
    };
    Ok(TransferPlan {
        origin_area,
        resulting_state,
    })
}
