use crate::shared::core::primitives::{Cents, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftClosedV1 {
    pub shift_id: String,
    pub closed_at: Timestamp,
    pub declared_cash: Cents,
    pub expected_cash: Cents,
    pub difference: Cents,
    pub notes: Option<String>,
}
