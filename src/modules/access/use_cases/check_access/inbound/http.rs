use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::Timestamp;
use crate::shell::http::{access_error_response, invalid_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CheckAccessBody {
    pub operator_id: String,
    pub sector_id: String,
    #[serde(default)]
    pub street_id: Option<String>,
    #[serde(default)]
    pub at: Option<Timestamp>,
}

#[derive(Serialize)]
pub struct CheckAccessResponse {
    pub allowed: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CheckAccessBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection.body_text()),
    };

    match state
        .resolver
        .can_access(
            &body.operator_id,
            &body.sector_id,
            body.street_id.as_deref(),
            body.at,
        )
        .await
    {
        Ok(allowed) => Json(CheckAccessResponse { allowed }).into_response(),
        Err(err) => access_error_response(&err),
    }
}
