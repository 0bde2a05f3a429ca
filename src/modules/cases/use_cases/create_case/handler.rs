// Opens a new case.
//
// Primary write
// - The case row. Its code must be free; a taken code is re-minted a bounded
//   number of times.
//
// Secondary writes (reported in the Outcome, never fail the creation)
// - Attachment upload, once the code is settled, and its reference on the case.
// - The initial movement.
// - The first TimeInArea interval when a process template is attached.

use crate::modules::cases::core::case::{Case, CaseCode, DocumentRef};
use crate::modules::cases::core::identity::mint_code;
use crate::modules::cases::core::movement::NewMovement;
use crate::modules::cases::core::ports::{AttachmentStore, CaseRepository, MovementLedger, TimeInAreaRepository};
use crate::modules::cases::core::session::Session;
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::create_case::command::{AttachmentUpload, CreateCase};
use crate::modules::cases::use_cases::create_case::decide::decide_create;
use crate::modules::cases::use_cases::errors::ApplicationError;
use crate::modules::cases::use_cases::settings::WorkflowSettings;
use crate::modules::cases::use_cases::track_time_in_area::tracker::TimeInAreaTracker;
use crate::shared::core::outcome::{Outcome, SecondaryLog};
use crate::shared::infrastructure::store::{StoreError, within};
use std::sync::Arc;

pub const MAX_MINT_ATTEMPTS: usize = 5;
pub const ATTACHMENT_FOLDER: &str = "tramites";
pub const CREATION_NOTE: &str = "case created";

pub struct CreateCaseHandler<TCases, TLedger, TIntervals, TAttachments>
where
    TCases: CaseRepository + 'static,
    TLedger: MovementLedger + 'static,
    TIntervals: TimeInAreaRepository + 'static,
    TAttachments: AttachmentStore + 'static,
{
    cases: Arc<TCases>,
    ledger: Arc<TLedger>,
    tracker: TimeInAreaTracker<TIntervals>,
    attachments: Arc<TAttachments>,
    settings: WorkflowSettings,
}

pub fn attachment_path(code: &CaseCode, file_name: &str) -> String {
    format!("{ATTACHMENT_FOLDER}/{code}-{file_name}")
}

impl<TCases, TLedger, TIntervals, TAttachments> CreateCaseHandler<TCases, TLedger, TIntervals, TAttachments>
where
    TCases: CaseRepository + 'static,
    TLedger: MovementLedger + 'static,
    TIntervals: TimeInAreaRepository + 'static,
    TAttachments: AttachmentStore + 'static,
{
    pub fn new(
        cases: Arc<TCases>,
        ledger: Arc<TLedger>,
        intervals: Arc<TIntervals>,
        attachments: Arc<TAttachments>,
        settings: WorkflowSettings,
    ) -> Self {
        let tracker = TimeInAreaTracker::new(intervals, settings.clock.clone(), settings.store_timeout);
        Self {
            cases,
            ledger,
            tracker,
            attachments,
            settings,
        }
    }

    async fn upload(&self, code: &CaseCode, upload: &AttachmentUpload) -> Result<DocumentRef, StoreError> {
        let path = attachment_path(code, &upload.file_name);
        let url = within(
            self.settings.store_timeout,
            "upload attachment",
            self.attachments.upload(&path, &upload.content),
        )
        .await?;
        Ok(DocumentRef {
            url,
            file_name: upload.file_name.clone(),
        })
    }

    pub async fn handle(&self, session: &Session, command: CreateCase) -> Result<Outcome<Case>, ApplicationError> {
        let plan = decide_create(session, &command, &self.settings.areas, &self.settings.processes)?;
        let timeout = self.settings.store_timeout;
        let now = self.settings.clock.now_millis();
        let mut secondary = SecondaryLog::new();

        let mut stored = None;
        for attempt in 1..=MAX_MINT_ATTEMPTS {
            let code = mint_code(&plan.prefix, self.settings.suffixes.as_ref());
            if within(timeout, "check case code", self.cases.get(&code)).await?.is_some() {
                tracing::debug!(%code, attempt, "case code taken, minting another");
                continue;
            }

            let case = Case {
                code: code.clone(),
                title: command.title.clone(),
                external_ref: command.external_ref.clone().filter(|r| !r.trim().is_empty()),
                sender_name: command.sender_name.clone(),
                current_area: command.first_area.clone(),
                final_area: command.final_area.clone(),
                state: CaseState::EnTransito,
                attachment: None,
                process_template: command.process_template.clone(),
                created_at: now,
                updated_at: now,
                version: 1,
            };

            match within(timeout, "insert case", self.cases.insert(case)).await {
                Ok(case) => {
                    stored = Some(case);
                    break;
                }
                Err(StoreError::Duplicate(taken)) => {
                    tracing::debug!(code = %taken, attempt, "case code raced, minting another");
                }
                Err(error) => return Err(error.into()),
            }
        }
        let mut case = stored.ok_or_else(|| {
            ApplicationError::Unexpected(format!("no free case code after {MAX_MINT_ATTEMPTS} attempts"))
        })?;

        if let Some(upload) = &command.attachment {
            if let Some(document) = secondary.absorb("upload attachment", self.upload(&case.code, upload).await) {
                let attached = within(
                    timeout,
                    "attach document",
                    self.cases.attach_document(&case.code, document),
                )
                .await;
                if let Some(updated) = secondary.absorb("attach document", attached) {
                    case = updated;
                }
            }
        }

        let acting_user = if session.display_name.trim().is_empty() {
            case.sender_name.clone()
        } else {
            session.display_name.clone()
        };
        let initial = NewMovement {
            case_code: case.code.clone(),
            origin_area: plan.creator_area,
            destination_area: case.current_area.clone(),
            external_ref: case.external_ref.clone(),
            notes: Some(CREATION_NOTE.to_string()),
            acting_user: Some(acting_user),
            resulting_state: Some(CaseState::EnTransito),
            occurred_at: now,
        };
        secondary.absorb(
            "record initial movement",
            within(timeout, "append movement", self.ledger.append(initial)).await,
        );

        if let Some(template) = &case.process_template {
            secondary.absorb(
                "open time in area",
                self.tracker.open_interval(&case.code, &case.current_area, template).await,
            );
        }

        tracing::info!(case = %case.code, area = %case.current_area, "case created");
        Ok(secondary.finish(case))
    }
}
