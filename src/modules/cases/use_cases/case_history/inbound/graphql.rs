use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::movement::Movement;
use crate::modules::cases::use_cases::errors::ApplicationError;
use crate::modules::cases::use_cases::list_cases::inbound::graphql::GqlCase;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlMovement {
    pub id: i64,
    pub case_code: String,
    pub origin_area: String,
    pub destination_area: String,
    pub external_ref: Option<String>,
    pub notes: Option<String>,
    pub acting_user: Option<String>,
    pub resulting_state: Option<String>,
    pub occurred_at: i64,
}

impl From<Movement> for GqlMovement {
    fn from(m: Movement) -> Self {
        Self {
            id: m.id,
            case_code: m.case_code.to_string(),
            origin_area: m.origin_area,
            destination_area: m.destination_area,
            external_ref: m.external_ref,
            notes: m.notes,
            acting_user: m.acting_user,
            resulting_state: m.resulting_state.map(|s| s.to_string()),
            occurred_at: m.occurred_at,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlCaseHistory {
    pub case: GqlCase,
    pub movements: Vec<GqlMovement>,
    pub consistent: bool,
}

#[derive(Default)]
pub struct CaseHistoryQuery;

#[Object]
impl CaseHistoryQuery {
    async fn case(&self, context: &Context<'_>, code: String) -> GqlResult<Option<GqlCase>> {
        let app = context.data_unchecked::<AppState>();
        match app.history_handler.find(&CaseCode::new(code)).await {
            Ok(case) => Ok(Some(case.into())),
            Err(ApplicationError::NotFound(_)) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn case_history(&self, context: &Context<'_>, code: String) -> GqlResult<GqlCaseHistory> {
        let app = context.data_unchecked::<AppState>();
        let history = app.history_handler.history(&CaseCode::new(code)).await?;
        Ok(GqlCaseHistory {
            case: history.case.into(),
            movements: history.movements.into_iter().map(Into::into).collect(),
            consistent: history.consistent,
        })
    }
}
