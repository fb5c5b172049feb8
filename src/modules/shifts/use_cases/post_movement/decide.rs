use crate::modules::shifts::core::decision::{DecideError, Decision};
use crate::modules::shifts::core::events::{
    ShiftEvent, v1::cash_movement_posted::CashMovementPostedV1,
};
use crate::modules::shifts::core::ledger::CashMovement;
use crate::modules::shifts::core::reconciliation::admits;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::post_movement::command::PostMovement;
use crate::shared::core::primitives::Timestamp;

pub fn decide_post(
    state: &ShiftState,
    command: PostMovement,
    movement_id: &str,
    recorded_at: Timestamp,
) -> Decision {
    let Some(shift) = state.record() else {
        return Decision::Rejected {
            reason: DecideError::ShiftNotFound,
        };
    };
    if command.idempotency_key.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::InvalidIdempotencyKey,
        };
    }
    // A replay is answered even after close: the original write did apply.
    if let Some(existing) = shift.ledger.find_by_key(&command.idempotency_key) {
        if existing.movement == command.movement {
            return Decision::AlreadyApplied;
        }
        return Decision::Rejected {
            reason: DecideError::IdempotencyConflict(command.idempotency_key),
        };
    }
    let ShiftState::Open(shift) = state else {
        return Decision::Rejected {
            reason: DecideError::ShiftNotOpen,
        };
    };
    if let Err(reason) = validate(&command.movement) {
        return Decision::Rejected { reason };
    }
    if !admits(shift.opening_float, shift.ledger.entries(), &command.movement) {
        return Decision::Rejected {
            reason: DecideError::InvalidAmount(command.movement.amount()),
        };
    }

    Decision::Accepted {
        events: vec![ShiftEvent::CashMovementPostedV1(CashMovementPostedV1 {
            shift_id: shift.shift_id.clone(),
            movement_id: movement_id.to_string(),
            sequence: shift.ledger.next_sequence(),
            idempotency_key: command.idempotency_key,
            movement: command.movement,
            recorded_at,
        })],
        intents: vec![],
    }
}

fn validate(movement: &CashMovement) -> Result<(), DecideError> {
    if movement.amount() <= 0 {
        return Err(DecideError::InvalidAmount(movement.amount()));
    }
    match movement {
        CashMovement::Adjustment { reason, .. } if reason.trim().is_empty() => {
            Err(DecideError::MissingReason)
        }
        _ => Ok(()),
    }
}
