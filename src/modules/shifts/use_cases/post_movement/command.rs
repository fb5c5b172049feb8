use crate::modules::shifts::core::ledger::CashMovement;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostMovement {
    pub shift_id: String,
    /// Caller-supplied; replaying the same key never double-counts.
    pub idempotency_key: String,
    pub movement: CashMovement,
}
