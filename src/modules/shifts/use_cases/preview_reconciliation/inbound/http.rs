use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

pub async fn reconciliation(
    State(state): State<AppState>,
    Path(shift_id): Path<String>,
) -> impl IntoResponse {
    match state.lifecycle.preview_reconciliation(&shift_id).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => application_error_response(&err),
    }
}

pub async fn shift(State(state): State<AppState>, Path(shift_id): Path<String>) -> impl IntoResponse {
    match state.lifecycle.shift(&shift_id).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => application_error_response(&err),
    }
}

#[derive(Serialize)]
pub struct CurrentShiftResponse {
    pub shift_id: Option<String>,
}

pub async fn current_shift(
    State(state): State<AppState>,
    Path((operator_id, device_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.lifecycle.current_shift(&operator_id, &device_id).await {
        Ok(shift_id) => Json(CurrentShiftResponse { shift_id }).into_response(),
        Err(err) => application_error_response(&err),
    }
}
