use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::shifts::core::ledger::PaymentMethod;
use crate::modules::shifts::use_cases::capture_payment::command::CapturePayment;
use crate::modules::shifts::use_cases::post_movement::handler::PostOutcome;
use crate::shared::core::primitives::Cents;
use crate::shell::http::{application_error_response, invalid_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CapturePaymentBody {
    pub operator_id: String,
    pub sector_id: String,
    #[serde(default)]
    pub street_id: Option<String>,
    pub method: PaymentMethod,
    pub amount: Cents,
    pub idempotency_key: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(shift_id): Path<String>,
    body: Result<Json<CapturePaymentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection.body_text()),
    };
    let command = CapturePayment {
        shift_id,
        operator_id: body.operator_id,
        sector_id: body.sector_id,
        street_id: body.street_id,
        method: body.method,
        amount: body.amount,
        idempotency_key: body.idempotency_key,
    };

    match state.lifecycle.capture_payment(command).await {
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
