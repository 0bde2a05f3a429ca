use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::cases::core::case::CaseCode;
use crate::shell::http::Caller;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Caller(_): Caller,
    Path(code): Path<String>,
) -> impl IntoResponse {
    match state.dwell_handler.handle(&CaseCode::new(code)).await {
        Ok(report) => Json(report).into_response(),
        Err(error) => error.into_response(),
    }
}
