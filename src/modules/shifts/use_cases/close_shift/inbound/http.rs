use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::shifts::use_cases::close_shift::command::CloseShift;
use crate::shared::core::primitives::Cents;
use crate::shell::http::{application_error_response, invalid_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CloseShiftBody {
    pub closing_declared_cash: Cents,
    #[serde(default)]
    pub notes: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(shift_id): Path<String>,
    body: Result<Json<CloseShiftBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection.body_text()),
    };
    let command = CloseShift {
        shift_id,
        closing_declared_cash: body.closing_declared_cash,
        notes: body.notes,
    };

    match state.lifecycle.close_shift(command).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => application_error_response(&err),
    }
}
