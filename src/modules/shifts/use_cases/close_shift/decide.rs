use crate::modules::shifts::core::decision::{DecideError, Decision};
use crate::modules::shifts::core::events::{ShiftEvent, v1::shift_closed::ShiftClosedV1};
use crate::modules::shifts::core::intents::ShiftIntent;
use crate::modules::shifts::core::reconciliation::reconcile;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::close_shift::command::CloseShift;
use crate::shared::core::primitives::Timestamp;

pub fn decide_close(state: &ShiftState, command: CloseShift, closed_at: Timestamp) -> Decision {
    let shift = match state {
        ShiftState::None => {
            return Decision::Rejected {
                reason: DecideError::ShiftNotFound,
            };
        }
        ShiftState::Closed { .. } => {
            return Decision::Rejected {
                reason: DecideError::ShiftNotOpen,
            };
        }
        ShiftState::Open(shift) => shift,
    };
    if command.closing_declared_cash < 0 {
        return Decision::Rejected {
            reason: DecideError::InvalidAmount(command.closing_declared_cash),
        };
    }

    let Ok(report) = reconcile(
        &shift.shift_id,
        shift.opening_float,
        shift.ledger.entries(),
        Some(command.closing_declared_cash),
    ) else {
        return Decision::Rejected {
            reason: DecideError::InvalidAmount(command.closing_declared_cash),
        };
    };
    let event = ShiftClosedV1 {
        shift_id: shift.shift_id.clone(),
        closed_at,
        declared_cash: command.closing_declared_cash,
        expected_cash: report.expected_cash,
        difference: report.difference.unwrap_or_default(),
        notes: command.notes,
    };
    Decision::Accepted {
        events: vec![ShiftEvent::ShiftClosedV1(event)],
        intents: vec![ShiftIntent::PublishShiftClosed { report }],
    }
}
