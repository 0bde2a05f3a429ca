use crate::modules::cases::adapters::outbound::attachments_in_memory::InMemoryAttachments;
use crate::modules::cases::adapters::outbound::cases_in_memory::InMemoryCases;
use crate::modules::cases::adapters::outbound::movements_in_memory::InMemoryMovementLedger;
use crate::modules::cases::adapters::outbound::time_in_area_in_memory::InMemoryTimeInArea;
use crate::modules::cases::use_cases::case_history::handler::CaseHistoryHandler;
use crate::modules::cases::use_cases::create_case::handler::CreateCaseHandler;
use crate::modules::cases::use_cases::list_cases::handler::ListCasesHandler;
use crate::modules::cases::use_cases::settings::WorkflowSettings;
use crate::modules::cases::use_cases::track_time_in_area::handler::DwellReportHandler;
use crate::modules::cases::use_cases::transfer_case::handler::TransferCaseHandler;
use std::sync::Arc;

/// The four logical stores, all in memory.
#[derive(Clone)]
pub struct InMemoryStores {
    pub cases: Arc<InMemoryCases>,
    pub ledger: Arc<InMemoryMovementLedger>,
    pub intervals: Arc<InMemoryTimeInArea>,
    pub attachments: Arc<InMemoryAttachments>,
}

impl InMemoryStores {
    pub fn new(attachment_bucket: &str) -> Self {
        Self {
            cases: Arc::new(InMemoryCases::new()),
            ledger: Arc::new(InMemoryMovementLedger::new()),
            intervals: Arc::new(InMemoryTimeInArea::new()),
            attachments: Arc::new(InMemoryAttachments::new(attachment_bucket)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<
        CreateCaseHandler<InMemoryCases, InMemoryMovementLedger, InMemoryTimeInArea, InMemoryAttachments>,
    >,
    pub transfer_handler: Arc<TransferCaseHandler<InMemoryCases, InMemoryMovementLedger, InMemoryTimeInArea>>,
    pub list_handler: Arc<ListCasesHandler<InMemoryCases>>,
    pub history_handler: Arc<CaseHistoryHandler<InMemoryCases, InMemoryMovementLedger>>,
    pub dwell_handler: Arc<DwellReportHandler<InMemoryCases, InMemoryTimeInArea>>,
}

impl AppState {
    pub fn wire(stores: &InMemoryStores, settings: WorkflowSettings) -> Self {
        Self {
            create_handler: Arc::new(CreateCaseHandler::new(
                stores.cases.clone(),
                stores.ledger.clone(),
                stores.intervals.clone(),
                stores.attachments.clone(),
                settings.clone(),
            )),
            transfer_handler: Arc::new(TransferCaseHandler::new(
                stores.cases.clone(),
                stores.ledger.clone(),
                stores.intervals.clone(),
                settings.clone(),
            )),
            list_handler: Arc::new(ListCasesHandler::new(stores.cases.clone(), settings.store_timeout)),
            history_handler: Arc::new(CaseHistoryHandler::new(
                stores.cases.clone(),
                stores.ledger.clone(),
                settings.store_timeout,
            )),
            dwell_handler: Arc::new(DwellReportHandler::new(
                stores.cases.clone(),
                stores.intervals.clone(),
                settings,
            )),
        }
    }
}
