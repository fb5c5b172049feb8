use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::shifts::use_cases::open_shift::command::OpenShift;
use crate::shell::http::{application_error_response, invalid_body};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<OpenShift>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection.body_text()),
    };

    match state.lifecycle.open_shift(command).await {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(err) => application_error_response(&err),
    }
}
