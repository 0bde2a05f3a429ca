use axum::{
    Extension, Json, Router,
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::modules::cases::core::session::Session;
use crate::modules::cases::use_cases::case_history::inbound::http as history_http;
use crate::modules::cases::use_cases::create_case::inbound::http as create_http;
use crate::modules::cases::use_cases::errors::ApplicationError;
use crate::modules::cases::use_cases::list_cases::inbound::http as list_http;
use crate::modules::cases::use_cases::track_time_in_area::inbound::http as dwell_http;
use crate::modules::cases::use_cases::transfer_case::inbound::http as transfer_http;
use crate::shared::infrastructure::store::StoreError;
use crate::shell::graphql::{build_schema, graphiql, graphql_handler};
use crate::shell::state::AppState;

pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_AREA_HEADER: &str = "x-user-area";
pub const USER_ADMIN_HEADER: &str = "x-user-admin";

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/cases", post(create_http::handle).get(list_http::handle))
        .route("/cases/{code}", get(history_http::find))
        .route("/cases/{code}/history", get(history_http::history))
        .route("/cases/{code}/movements", get(history_http::movements))
        .route("/cases/{code}/transfers", post(transfer_http::handle))
        .route("/cases/{code}/time-in-area", get(dwell_http::handle))
        .route("/gql", get(graphiql).post(graphql_handler))
        .layer(Extension(schema))
        .with_state(state)
}

/// Caller identity, taken from headers set by the authenticating proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub Session);

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let display_name = header(&parts.headers, USER_NAME_HEADER)
            .ok_or((StatusCode::UNAUTHORIZED, "missing x-user-name header"))?;
        let is_admin = header(&parts.headers, USER_ADMIN_HEADER)
            .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1");
        Ok(Caller(Session {
            display_name,
            area: header(&parts.headers, USER_AREA_HEADER),
            is_admin,
        }))
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::ConcurrencyAnomaly { .. } => StatusCode::CONFLICT,
            ApplicationError::Store(StoreError::Duplicate(_)) => StatusCode::CONFLICT,
            ApplicationError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApplicationError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
