use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::access::use_cases::manage_assignments::command::{
    GrantAssignment, RevokeAssignment,
};
use crate::shared::core::primitives::Timestamp;
use crate::shell::http::{access_error_response, invalid_body};
use crate::shell::state::AppState;

pub async fn grant(
    State(state): State<AppState>,
    body: Result<Json<GrantAssignment>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection.body_text()),
    };
    match state.assignments.grant(command).await {
        Ok(assignment) => (StatusCode::CREATED, Json(assignment)).into_response(),
        Err(err) => access_error_response(&err),
    }
}

#[derive(Deserialize, Default)]
pub struct RevokeBody {
    #[serde(default)]
    pub at: Option<Timestamp>,
}

/// An empty body revokes at the current instant.
pub async fn revoke(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
    body: Option<Json<RevokeBody>>,
) -> impl IntoResponse {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let command = RevokeAssignment {
        assignment_id,
        at: body.at,
    };
    match state.assignments.revoke(command).await {
        Ok(assignment) => Json(assignment).into_response(),
        Err(err) => access_error_response(&err),
    }
}
