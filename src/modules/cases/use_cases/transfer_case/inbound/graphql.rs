use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::session::Session;
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::case_history::inbound::graphql::GqlMovement;
use crate::modules::cases::use_cases::create_case::inbound::graphql::GqlSecondaryFailure;
use crate::modules::cases::use_cases::list_cases::inbound::graphql::GqlCase;
use crate::modules::cases::use_cases::transfer_case::command::TransferCase;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlTransferred {
    pub movement: GqlMovement,
    pub case: GqlCase,
    pub secondary_failures: Vec<GqlSecondaryFailure>,
}

#[derive(Default)]
pub struct TransferCaseMutation;

#[Object]
impl TransferCaseMutation {
    #[allow(clippy::too_many_arguments)]
    async fn transfer_case(
        &self,
        context: &Context<'_>,
        code: String,
        destination_area: String,
        external_ref: String,
        origin_area: Option<String>,
        acting_user: Option<String>,
        notes: Option<String>,
        next_state: Option<String>,
        expected_version: Option<i64>,
    ) -> GqlResult<GqlTransferred> {
        let app = context.data_unchecked::<AppState>();
        let session = context.data::<Session>()?;

        let command = TransferCase {
            code: CaseCode::new(code),
            origin_area: origin_area.unwrap_or_default(),
            destination_area,
            external_ref,
            acting_user: acting_user.unwrap_or_else(|| session.display_name.clone()),
            notes,
            next_state: next_state.map(|s| s.parse::<CaseState>()).transpose()?,
            expected_version,
        };

        let outcome = app
            .transfer_handler
            .handle(session, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlTransferred {
            movement: outcome.value.movement.into(),
            case: outcome.value.case.into(),
            secondary_failures: outcome.secondary_failures.into_iter().map(Into::into).collect(),
        })
    }
}
