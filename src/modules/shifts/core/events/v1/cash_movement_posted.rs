use crate::modules::shifts::core::ledger::{CashMovement, LedgerEntry};
use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashMovementPostedV1 {
    pub shift_id: String,
    pub movement_id: String,
    pub sequence: u64,
    pub idempotency_key: String,
    pub movement: CashMovement,
    pub recorded_at: Timestamp,
}

impl From<CashMovementPostedV1> for LedgerEntry {
    fn from(event: CashMovementPostedV1) -> Self {
        LedgerEntry {
            movement_id: event.movement_id,
            sequence: event.sequence,
            idempotency_key: event.idempotency_key,
            movement: event.movement,
            recorded_at: event.recorded_at,
        }
    }
}
