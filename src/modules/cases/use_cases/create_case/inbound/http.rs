use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cases::use_cases::create_case::command::{AttachmentUpload, CreateCase};
use crate::shell::http::Caller;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AttachmentBody {
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Deserialize)]
pub struct CreateCaseBody {
    pub title: String,
    pub external_ref: Option<String>,
    pub sender_name: String,
    pub first_area: String,
    pub final_area: String,
    pub process_template: Option<String>,
    pub attachment: Option<AttachmentBody>,
}

pub async fn handle(
    State(state): State<AppState>,
    Caller(session): Caller,
    body: Result<Json<CreateCaseBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateCase {
        title: body.title,
        external_ref: body.external_ref,
        sender_name: body.sender_name,
        first_area: body.first_area,
        final_area: body.final_area,
        process_template: body.process_template,
        attachment: body.attachment.map(|a| AttachmentUpload {
            file_name: a.file_name,
            content: a.content,
        }),
    };

    match state.create_handler.handle(&session, command).await {
        Ok(outcome) => (StatusCode::CREATED, Json(outcome)).into_response(),
        Err(error) => error.into_response(),
    }
}
