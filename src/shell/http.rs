use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;

use crate::modules::access::core::errors::AccessError;
use crate::modules::access::use_cases::check_access::inbound::http as check_access_http;
use crate::modules::access::use_cases::manage_assignments::inbound::http as assignments_http;
use crate::modules::shifts::core::decision::DecideError;
use crate::modules::shifts::use_cases::capture_payment::inbound::http as capture_http;
use crate::modules::shifts::use_cases::close_shift::inbound::http as close_http;
use crate::modules::shifts::use_cases::lifecycle::ApplicationError;
use crate::modules::shifts::use_cases::open_shift::inbound::http as open_http;
use crate::modules::shifts::use_cases::post_movement::inbound::http as post_http;
use crate::modules::shifts::use_cases::preview_reconciliation::inbound::http as preview_http;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/access/check", post(check_access_http::handle))
        .route("/assignments", post(assignments_http::grant))
        .route("/assignments/{id}/revoke", post(assignments_http::revoke))
        .route("/shifts", post(open_http::handle))
        .route("/shifts/{id}", get(preview_http::shift))
        .route("/shifts/{id}/movements", post(post_http::handle))
        .route("/shifts/{id}/payments", post(capture_http::handle))
        .route("/shifts/{id}/close", post(close_http::handle))
        .route("/shifts/{id}/reconciliation", get(preview_http::reconciliation))
        .route(
            "/operators/{operator_id}/devices/{device_id}/shift",
            get(preview_http::current_shift),
        )
        .with_state(state)
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: code.to_string(),
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn invalid_body(message: impl Into<String>) -> Response {
    error_response(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_BODY", message)
}

fn access_status(err: &AccessError) -> StatusCode {
    match err {
        AccessError::OperatorNotFound(_)
        | AccessError::SectorNotFound(_)
        | AccessError::StreetNotFound(_)
        | AccessError::AssignmentNotFound(_) => StatusCode::NOT_FOUND,
        AccessError::InvalidHierarchy { .. } | AccessError::InvalidWindow => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AccessError::OperatorInactive(_) | AccessError::Unauthorized { .. } => {
            StatusCode::FORBIDDEN
        }
        AccessError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn decide_status(err: &DecideError) -> StatusCode {
    match err {
        DecideError::ShiftNotFound => StatusCode::NOT_FOUND,
        DecideError::ShiftAlreadyOpen
        | DecideError::ShiftNotOpen
        | DecideError::IdempotencyConflict(_) => StatusCode::CONFLICT,
        DecideError::InvalidAmount(_)
        | DecideError::InvalidIdempotencyKey
        | DecideError::MissingReason => StatusCode::UNPROCESSABLE_ENTITY,
        DecideError::ShiftOperatorMismatch => StatusCode::FORBIDDEN,
    }
}

pub fn access_error_response(err: &AccessError) -> Response {
    error_response(access_status(err), err.code(), err.to_string())
}

pub fn application_error_response(err: &ApplicationError) -> Response {
    let status = match err {
        ApplicationError::Rejected(reason) => decide_status(reason),
        ApplicationError::Access(reason) => access_status(reason),
        ApplicationError::Store(EventStoreError::VersionMismatch { .. }) => StatusCode::CONFLICT,
        ApplicationError::Store(_)
        | ApplicationError::Outbox(_)
        | ApplicationError::Index(_)
        | ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "request failed");
    }
    error_response(status, err.code(), err.to_string())
}
