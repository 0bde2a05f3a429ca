// Moves a case to another area, optionally changing its state.
//
// Primary writes
// - Append the movement to the ledger.
// - Update the case: current area is always the destination, state only
//   changes when a next state is given.
// - Ledger first, except with `expected_version`: then the conditional update
//   runs first so a losing transfer leaves no movement behind.
//
// Secondary writes
// - For cases with a process template: close the open interval, then open one
//   at the destination unless the case ends up completed.
//
// Concurrency
// - Without `expected_version` the last writer wins. With it, a stale version is
//   reported as a ConcurrencyAnomaly, both before and during the update.

use crate::modules::cases::core::case::Case;
use crate::modules::cases::core::movement::{Movement, NewMovement};
use crate::modules::cases::core::ports::{CaseRepository, MovementLedger, RoutingUpdate, TimeInAreaRepository};
use crate::modules::cases::core::session::Session;
use crate::modules::cases::use_cases::errors::ApplicationError;
use crate::modules::cases::use_cases::settings::WorkflowSettings;
use crate::modules::cases::use_cases::track_time_in_area::tracker::TimeInAreaTracker;
use crate::modules::cases::use_cases::transfer_case::command::TransferCase;
use crate::modules::cases::use_cases::transfer_case::decide::{decide_transfer, validate_transfer};
use crate::shared::core::outcome::{Outcome, SecondaryLog};
use crate::shared::infrastructure::store::{StoreError, within};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transferred {
    pub movement: Movement,
    pub case: Case,
}

pub struct TransferCaseHandler<TCases, TLedger, TIntervals>
where
    TCases: CaseRepository + 'static,
    TLedger: MovementLedger + 'static,
    TIntervals: TimeInAreaRepository + 'static,
{
    cases: Arc<TCases>,
    ledger: Arc<TLedger>,
    tracker: TimeInAreaTracker<TIntervals>,
    settings: WorkflowSettings,
}

impl<TCases, TLedger, TIntervals> TransferCaseHandler<TCases, TLedger, TIntervals>
where
    TCases: CaseRepository + 'static,
    TLedger: MovementLedger + 'static,
    TIntervals: TimeInAreaRepository + 'static,
{
    pub fn new(cases: Arc<TCases>, ledger: Arc<TLedger>, intervals: Arc<TIntervals>, settings: WorkflowSettings) -> Self {
        let tracker = TimeInAreaTracker::new(intervals, settings.clock.clone(), settings.store_timeout);
        Self {
            cases,
            ledger,
            tracker,
            settings,
        }
    }

    async fn update_routing(&self, case: &Case, update: RoutingUpdate) -> Result<Case, ApplicationError> {
        within(
            self.settings.store_timeout,
            "update case routing",
            self.cases.update_routing(&case.code, update),
        )
        .await
        .map_err(|error| match error {
            StoreError::VersionMismatch { expected, actual } => ApplicationError::ConcurrencyAnomaly {
                code: case.code.to_string(),
                expected,
                actual,
            },
            StoreError::NotFound(code) => ApplicationError::NotFound(code),
            other => ApplicationError::Store(other),
        })
    }

    pub async fn handle(
        &self,
        session: &Session,
        command: TransferCase,
    ) -> Result<Outcome<Transferred>, ApplicationError> {
        validate_transfer(&command, &self.settings.areas)?;
        let timeout = self.settings.store_timeout;

        let case = within(timeout, "load case", self.cases.get(&command.code))
            .await?
            .ok_or_else(|| ApplicationError::NotFound(command.code.to_string()))?;

        if let Some(expected) = command.expected_version {
            if expected != case.version {
                return Err(ApplicationError::ConcurrencyAnomaly {
                    code: case.code.to_string(),
                    expected,
                    actual: case.version,
                });
            }
        }

        let plan = decide_transfer(&case, &command, self.settings.transition_policy)?;
        let now = self.settings.clock.now_millis();

        let movement = NewMovement {
            case_code: case.code.clone(),
            origin_area: plan.origin_area.clone(),
            destination_area: command.destination_area.clone(),
            external_ref: Some(command.external_ref.clone()),
            notes: command.notes.clone().filter(|n| !n.trim().is_empty()),
            acting_user: Some(command.acting_user.clone()),
            resulting_state: command.next_state,
            occurred_at: now,
        };
        let update = RoutingUpdate {
            current_area: command.destination_area.clone(),
            state: plan.resulting_state,
            updated_at: now,
            expected_version: command.expected_version,
        };

        // A versioned transfer only reaches the ledger once its update won.
        let (movement, updated) = if command.expected_version.is_some() {
            let updated = self.update_routing(&case, update).await?;
            let movement = within(timeout, "append movement", self.ledger.append(movement)).await?;
            (movement, updated)
        } else {
            let movement = within(timeout, "append movement", self.ledger.append(movement)).await?;
            let updated = self.update_routing(&case, update).await?;
            (movement, updated)
        };

        let mut secondary = SecondaryLog::new();
        if let Some(template) = &updated.process_template {
            secondary.absorb("close time in area", self.tracker.close_current_interval(&updated.code).await);
            if plan.opens_interval() {
                secondary.absorb(
                    "open time in area",
                    self.tracker
                        .open_interval(&updated.code, &updated.current_area, template)
                        .await,
                );
            }
        }

        tracing::info!(
            case = %updated.code,
            from = %movement.origin_area,
            to = %movement.destination_area,
            state = %updated.state,
            user = %session.display_name,
            "case transferred"
        );
        Ok(secondary.finish(Transferred {
            movement,
            case: updated,
        }))
    }
}
