use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::list_cases::handler::ListCases;
use crate::shell::http::Caller;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListCasesParams {
    pub state: Option<CaseState>,
    pub area: Option<String>,
    pub search: Option<String>,
    pub hide_completed: Option<bool>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Caller(session): Caller,
    Query(params): Query<ListCasesParams>,
) -> impl IntoResponse {
    let request = ListCases {
        state: params.state,
        area: params.area,
        search: params.search,
        hide_completed: params.hide_completed.unwrap_or(false),
        offset: params.offset,
        limit: params.limit,
    };
    match state.list_handler.handle(&session, request).await {
        Ok(page) => Json(page).into_response(),
        Err(error) => error.into_response(),
    }
}
