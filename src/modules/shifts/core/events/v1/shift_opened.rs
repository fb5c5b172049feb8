use crate::shared::core::primitives::{Cents, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftOpenedV1 {
    pub shift_id: String,
    pub operator_id: String,
    pub device_id: String,
    pub sector_id: Option<String>,
    pub opening_float: Cents,
    pub opened_at: Timestamp,
    pub notes: Option<String>,
}
