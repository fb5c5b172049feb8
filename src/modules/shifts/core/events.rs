pub mod v1 {
    pub mod cash_movement_posted;
    pub mod shift_closed;
    pub mod shift_opened;
}

use v1::{
    cash_movement_posted::CashMovementPostedV1, shift_closed::ShiftClosedV1,
    shift_opened::ShiftOpenedV1,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ShiftEvent {
    ShiftOpenedV1(ShiftOpenedV1),
    CashMovementPostedV1(CashMovementPostedV1),
    ShiftClosedV1(ShiftClosedV1),
}
