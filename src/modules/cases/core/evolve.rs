// Rebuild where a case is, and in which state, from its movement ledger.

use crate::modules::cases::core::movement::Movement;
use crate::modules::cases::core::state::CaseState;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingPosition {
    pub area: String,
    pub state: CaseState,
}

pub fn evolve(position: Option<RoutingPosition>, movement: &Movement) -> Option<RoutingPosition> {
    let previous_state = position
        .map(|p| p.state)
        .unwrap_or(CaseState::EnTransito);
    Some(RoutingPosition {
        area: movement.destination_area.clone(),
        state: movement.resulting_state.unwrap_or(previous_state),
    })
}

/// Fold movements oldest first. Input order does not matter.
pub fn replay(movements: &[Movement]) -> Option<RoutingPosition> {
    let mut ordered: Vec<&Movement> = movements.iter().collect();
    ordered.sort_by_key(|m| (m.occurred_at, m.id));
    ordered.into_iter().fold(None, evolve)
}
