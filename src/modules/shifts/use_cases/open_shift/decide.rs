use crate::modules::shifts::core::decision::{DecideError, Decision};
use crate::modules::shifts::core::events::{ShiftEvent, v1::shift_opened::ShiftOpenedV1};
use crate::modules::shifts::core::intents::ShiftIntent;
use crate::modules::shifts::core::state::ShiftState;
use crate::modules::shifts::use_cases::open_shift::command::OpenShift;
use crate::shared::core::primitives::Timestamp;

pub fn decide_open(
    state: &ShiftState,
    command: OpenShift,
    shift_id: &str,
    opened_at: Timestamp,
) -> Decision {
    if !matches!(state, ShiftState::None) {
        return Decision::Rejected {
            reason: DecideError::ShiftAlreadyOpen,
        };
    }
    if command.opening_float < 0 {
        return Decision::Rejected {
            reason: DecideError::InvalidAmount(command.opening_float),
        };
    }
    let payload = ShiftOpenedV1 {
        shift_id: shift_id.to_string(),
        operator_id: command.operator_id,
        device_id: command.device_id,
        sector_id: command.sector_id,
        opening_float: command.opening_float,
        opened_at,
        notes: command.notes,
    };
    Decision::Accepted {
        events: vec![ShiftEvent::ShiftOpenedV1(payload.clone())],
        intents: vec![ShiftIntent::PublishShiftOpened { payload }],
    }
}
