use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cases::core::case::CaseCode;
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::transfer_case::command::TransferCase;
use crate::shell::http::Caller;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TransferCaseBody {
    pub origin_area: Option<String>,
    pub destination_area: String,
    pub external_ref: String,
    /// Defaults to the caller.
    pub acting_user: Option<String>,
    pub notes: Option<String>,
    pub next_state: Option<CaseState>,
    pub expected_version: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Caller(session): Caller,
    body: Result<Json<TransferCaseBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = TransferCase {
        code: CaseCode::new(code),
        origin_area: body.origin_area.unwrap_or_default(),
        destination_area: body.destination_area,
        external_ref: body.external_ref,
        acting_user: body.acting_user.unwrap_or_else(|| session.display_name.clone()),
        notes: body.notes,
        next_state: body.next_state,
        expected_version: body.expected_version,
    };

    match state.transfer_handler.handle(&session, command).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(error) => error.into_response(),
    }
}
