use crate::modules::shifts::core::ledger::PaymentMethod;
use crate::shared::core::primitives::Cents;
use serde::Deserialize;

/// A payment captured by an operator at a location, to be recorded on the
/// operator's open shift.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CapturePayment {
    pub shift_id: String,
    pub operator_id: String,
    pub sector_id: String,
    #[serde(default)]
    pub street_id: Option<String>,
    pub method: PaymentMethod,
    pub amount: Cents,
    pub idempotency_key: String,
}
