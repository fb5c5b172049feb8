use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::ledger::ShiftLedger;
use crate::modules::shifts::core::state::{ClosingRecord, ShiftRecord, ShiftState};

pub fn evolve(state: ShiftState, event: ShiftEvent) -> ShiftState {
    match (state, event) {
        (ShiftState::None, ShiftEvent::ShiftOpenedV1(e)) => ShiftState::Open(ShiftRecord {
            shift_id: e.shift_id,
            operator_id: e.operator_id,
            device_id: e.device_id,
            sector_id: e.sector_id,
            opening_float: e.opening_float,
            opened_at: e.opened_at,
            notes: e.notes,
            ledger: ShiftLedger::new(),
        }),
        (ShiftState::Open(mut shift), ShiftEvent::CashMovementPostedV1(e)) => {
            shift.ledger.push(e.into());
            ShiftState::Open(shift)
        }
        (ShiftState::Open(shift), ShiftEvent::ShiftClosedV1(e)) => ShiftState::Closed {
            shift,
            closing: ClosingRecord {
                closed_at: e.closed_at,
                declared_cash: e.declared_cash,
                expected_cash: e.expected_cash,
                difference: e.difference,
                notes: e.notes,
            },
        },
        (state, _) => state,
    }
}
