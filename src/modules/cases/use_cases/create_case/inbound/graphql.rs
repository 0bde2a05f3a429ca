use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::cases::core::session::Session;
use crate::modules::cases::use_cases::create_case::command::CreateCase;
use crate::modules::cases::use_cases::list_cases::inbound::graphql::GqlCase;
use crate::shared::core::outcome::SecondaryFailure;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlSecondaryFailure {
    pub step: String,
    pub reason: String,
}

impl From<SecondaryFailure> for GqlSecondaryFailure {
    fn from(f: SecondaryFailure) -> Self {
        Self {
            step: f.step,
            reason: f.reason,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlCreatedCase {
    pub case: GqlCase,
    pub secondary_failures: Vec<GqlSecondaryFailure>,
}

#[derive(Default)]
pub struct CreateCaseMutation;

#[Object]
impl CreateCaseMutation {
    #[allow(clippy::too_many_arguments)]
    async fn create_case(
        &self,
        context: &Context<'_>,
        title: String,
        sender_name: String,
        first_area: String,
        final_area: String,
        external_ref: Option<String>,
        process_template: Option<String>,
    ) -> GqlResult<GqlCreatedCase> {
        let app = context.data_unchecked::<AppState>();
        let session = context.data::<Session>()?;

        let command = CreateCase {
            title,
            external_ref,
            sender_name,
            first_area,
            final_area,
            process_template,
            attachment: None,
        };

        let outcome = app
            .create_handler
            .handle(session, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlCreatedCase {
            case: outcome.value.into(),
            secondary_failures: outcome.secondary_failures.into_iter().map(Into::into).collect(),
        })
    }
}
