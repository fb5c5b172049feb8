use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::intents::ShiftIntent;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("an open shift already exists for this operator and device")]
    ShiftAlreadyOpen,

    #[error("shift is not open")]
    ShiftNotOpen,

    #[error("shift not found")]
    ShiftNotFound,

    #[error("amount must be positive ({0})")]
    InvalidAmount(i64),

    #[error("an idempotency key is required")]
    InvalidIdempotencyKey,

    #[error("idempotency key {0} was already used for a different movement")]
    IdempotencyConflict(String),

    #[error("adjustments require a reason")]
    MissingReason,

    #[error("shift belongs to another operator")]
    ShiftOperatorMismatch,
}

impl DecideError {
    pub fn code(&self) -> &'static str {
        match self {
            DecideError::ShiftAlreadyOpen => "SHIFT_ALREADY_OPEN",
            DecideError::ShiftNotOpen => "SHIFT_NOT_OPEN",
            DecideError::ShiftNotFound => "SHIFT_NOT_FOUND",
            DecideError::InvalidAmount(_) => "INVALID_AMOUNT",
            DecideError::InvalidIdempotencyKey => "INVALID_IDEMPOTENCY_KEY",
            DecideError::IdempotencyConflict(_) => "IDEMPOTENCY_CONFLICT",
            DecideError::MissingReason => "MISSING_REASON",
            DecideError::ShiftOperatorMismatch => "SHIFT_OPERATOR_MISMATCH",
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        events: Vec<ShiftEvent>,
        intents: Vec<ShiftIntent>,
    },
    /// The command was already applied; nothing to append.
    AlreadyApplied,
    Rejected {
        reason: DecideError,
    },
}
