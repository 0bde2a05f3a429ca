use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::cases::core::case::CaseCode;
use crate::shell::http::Caller;
use crate::shell::state::AppState;

pub async fn find(
    State(state): State<AppState>,
    Caller(_): Caller,
    Path(code): Path<String>,
) -> impl IntoResponse {
    match state.history_handler.find(&CaseCode::new(code)).await {
        Ok(case) => Json(case).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn movements(
    State(state): State<AppState>,
    Caller(_): Caller,
    Path(code): Path<String>,
) -> impl IntoResponse {
    match state.history_handler.movements(&CaseCode::new(code)).await {
        Ok(movements) => Json(movements).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn history(
    State(state): State<AppState>,
    Caller(_): Caller,
    Path(code): Path<String>,
) -> impl IntoResponse {
    match state.history_handler.history(&CaseCode::new(code)).await {
        Ok(history) => Json(history).into_response(),
        Err(error) => error.into_response(),
    }
}
