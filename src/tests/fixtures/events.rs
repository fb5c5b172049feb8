use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::events::v1::{
    cash_movement_posted::CashMovementPostedV1, shift_closed::ShiftClosedV1,
    shift_opened::ShiftOpenedV1,
};
use crate::modules::shifts::core::ledger::CashMovement;
use crate::shared::core::primitives::Cents;
use crate::tests::fixtures::directory::at;

pub fn opened_event(shift_id: &str, opening_float: Cents) -> ShiftEvent {
    ShiftEvent::ShiftOpenedV1(ShiftOpenedV1 {
        shift_id: shift_id.to_string(),
        operator_id: "op-ana".to_string(),
        device_id: "dev-1".to_string(),
        sector_id: None,
        opening_float,
        opened_at: at(2024, 6, 1),
        notes: None,
    })
}

pub fn posted_event(
    shift_id: &str,
    sequence: u64,
    idempotency_key: &str,
    movement: CashMovement,
) -> ShiftEvent {
    ShiftEvent::CashMovementPostedV1(CashMovementPostedV1 {
        shift_id: shift_id.to_string(),
        movement_id: format!("mv-{sequence}"),
        sequence,
        idempotency_key: idempotency_key.to_string(),
        movement,
        recorded_at: at(2024, 6, 1),
    })
}

pub fn closed_event(shift_id: &str, declared_cash: Cents, expected_cash: Cents) -> ShiftEvent {
    ShiftEvent::ShiftClosedV1(ShiftClosedV1 {
        shift_id: shift_id.to_string(),
        closed_at: at(2024, 6, 2),
        declared_cash,
        expected_cash,
        difference: declared_cash - expected_cash,
        notes: None,
    })
}
