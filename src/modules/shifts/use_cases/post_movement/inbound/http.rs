use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::shifts::core::ledger::CashMovement;
use crate::modules::shifts::use_cases::post_movement::command::PostMovement;
use crate::modules::shifts::use_cases::post_movement::handler::PostOutcome;
use crate::shell::http::{application_error_response, invalid_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PostMovementBody {
    pub idempotency_key: String,
    pub movement: CashMovement,
}

/// 201 for a newly recorded movement, 200 for a replayed key.
pub async fn handle(
    State(state): State<AppState>,
    Path(shift_id): Path<String>,
    body: Result<Json<PostMovementBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection.body_text()),
    };
    let command = PostMovement {
        shift_id,
        idempotency_key: body.idempotency_key,
        movement: body.movement,
    };

    match state.lifecycle.post_movement(command).await {
        Ok(posted) => {
            let status = match posted.outcome {
                PostOutcome::Recorded => StatusCode::CREATED,
                PostOutcome::Duplicate => StatusCode::OK,
            };
            (status, Json(posted)).into_response()
        }
        Err(err) => application_error_response(&err),
    }
}
