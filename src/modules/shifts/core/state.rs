use crate::modules::shifts::core::ledger::{LedgerEntry, ShiftLedger};
use crate::shared::core::primitives::{Cents, Timestamp};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRecord {
    pub shift_id: String,
    pub operator_id: String,
    pub device_id: String,
    pub sector_id: Option<String>,
    pub opening_float: Cents,
    pub opened_at: Timestamp,
    pub notes: Option<String>,
    pub ledger: ShiftLedger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingRecord {
    pub closed_at: Timestamp,
    pub declared_cash: Cents,
    pub expected_cash: Cents,
    pub difference: Cents,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftState {
    None,
    Open(ShiftRecord),
    Closed {
        shift: ShiftRecord,
        closing: ClosingRecord,
    },
}

impl ShiftState {
    pub fn record(&self) -> Option<&ShiftRecord> {
        match self {
            ShiftState::None => None,
            ShiftState::Open(shift) | ShiftState::Closed { shift, .. } => Some(shift),
        }
    }

    pub fn status(&self) -> Option<ShiftStatus> {
        match self {
            ShiftState::None => None,
            ShiftState::Open(_) => Some(ShiftStatus::Open),
            ShiftState::Closed { .. } => Some(ShiftStatus::Closed),
        }
    }

    pub fn view(&self) -> Option<ShiftView> {
        let shift = self.record()?;
        let closing = match self {
            ShiftState::Closed { closing, .. } => Some(closing),
            _ => None,
        };
        Some(ShiftView {
            shift_id: shift.shift_id.clone(),
            operator_id: shift.operator_id.clone(),
            device_id: shift.device_id.clone(),
            sector_id: shift.sector_id.clone(),
            status: self.status()?,
            opening_float: shift.opening_float,
            opened_at: shift.opened_at,
            closed_at: closing.map(|c| c.closed_at),
            closing_declared_cash: closing.map(|c| c.declared_cash),
            notes: shift.notes.clone(),
            closing_notes: closing.and_then(|c| c.notes.clone()),
            movements: shift.ledger.entries().to_vec(),
        })
    }
}

/// Read model of a shift as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftView {
    pub shift_id: String,
    pub operator_id: String,
    pub device_id: String,
    pub sector_id: Option<String>,
    pub status: ShiftStatus,
    pub opening_float: Cents,
    pub opened_at: Timestamp,
    pub closed_at: Option<Timestamp>,
    pub closing_declared_cash: Option<Cents>,
    pub notes: Option<String>,
    pub closing_notes: Option<String>,
    pub movements: Vec<LedgerEntry>,
}
