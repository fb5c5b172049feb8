// Reconciliation reporter.
//
// Pure: the report depends only on the shift's opening float, its ledger
// entries and the declared amount. No clock reads, no I/O, so the same
// history always yields the same report whether it is a close-out or a
// mid-shift preview.

use crate::modules::shifts::core::ledger::{AdjustmentKind, CashMovement, LedgerEntry, PaymentMethod};
use crate::modules::shifts::core::state::ShiftState;
use crate::shared::core::primitives::Cents;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodTotal {
    pub method: PaymentMethod,
    pub count: u64,
    pub total: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentTotal {
    pub kind: AdjustmentKind,
    pub count: u64,
    pub total: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    pub shift_id: String,
    pub opening_float: Cents,
    /// Sorted by method.
    pub payments: Vec<MethodTotal>,
    /// Sorted by kind.
    pub adjustments: Vec<AdjustmentTotal>,
    pub total_payments: Cents,
    pub movement_count: u64,
    pub expected_cash: Cents,
    pub declared_cash: Option<Cents>,
    /// `declared_cash - expected_cash`; absent while nothing is declared.
    pub difference: Option<Cents>,
}

/// A ledger whose totals no longer fit in [`Cents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("shift totals exceed the representable amount")]
pub struct AmountOverflow;

fn add(left: Cents, right: Cents) -> Result<Cents, AmountOverflow> {
    left.checked_add(right).ok_or(AmountOverflow)
}

#[derive(Default)]
struct Totals {
    payments: BTreeMap<PaymentMethod, (u64, Cents)>,
    adjustments: BTreeMap<AdjustmentKind, (u64, Cents)>,
    total_payments: Cents,
    expected_cash: Cents,
}

impl Totals {
    fn over(opening_float: Cents, entries: &[LedgerEntry]) -> Result<Self, AmountOverflow> {
        let mut totals = Totals {
            expected_cash: opening_float,
            ..Totals::default()
        };
        for entry in entries {
            totals.push(&entry.movement)?;
        }
        Ok(totals)
    }

    fn push(&mut self, movement: &CashMovement) -> Result<(), AmountOverflow> {
        self.expected_cash = add(self.expected_cash, movement.cash_effect())?;
        let bucket = match movement {
            CashMovement::Payment { method, .. } => self.payments.entry(*method).or_default(),
            CashMovement::Adjustment { kind, .. } => self.adjustments.entry(*kind).or_default(),
        };
        bucket.0 += 1;
        bucket.1 = add(bucket.1, movement.amount())?;
        if let CashMovement::Payment { amount, .. } = movement {
            self.total_payments = add(self.total_payments, *amount)?;
        }
        Ok(())
    }
}

/// expected = opening float + cash payments + deposits - withdrawals.
pub fn reconcile(
    shift_id: &str,
    opening_float: Cents,
    entries: &[LedgerEntry],
    declared_cash: Option<Cents>,
) -> Result<ReconciliationReport, AmountOverflow> {
    let totals = Totals::over(opening_float, entries)?;
    let difference = match declared_cash {
        Some(declared) => Some(
            declared
                .checked_sub(totals.expected_cash)
                .ok_or(AmountOverflow)?,
        ),
        None => None,
    };

    Ok(ReconciliationReport {
        shift_id: shift_id.to_string(),
        opening_float,
        payments: totals
            .payments
            .into_iter()
            .map(|(method, (count, total))| MethodTotal {
                method,
                count,
                total,
            })
            .collect(),
        adjustments: totals
            .adjustments
            .into_iter()
            .map(|(kind, (count, total))| AdjustmentTotal { kind, count, total })
            .collect(),
        total_payments: totals.total_payments,
        movement_count: entries.len() as u64,
        expected_cash: totals.expected_cash,
        declared_cash,
        difference,
    })
}

/// Whether `movement` can join the ledger while every total, and the
/// difference against a zero declaration, stays representable.
pub fn admits(opening_float: Cents, entries: &[LedgerEntry], movement: &CashMovement) -> bool {
    let Ok(mut totals) = Totals::over(opening_float, entries) else {
        return false;
    };
    totals.push(movement).is_ok() && (0 as Cents).checked_sub(totals.expected_cash).is_some()
}

/// Report for a folded shift: declared figures only once it is closed.
pub fn report_for(state: &ShiftState) -> Result<Option<ReconciliationReport>, AmountOverflow> {
    match state {
        ShiftState::None => Ok(None),
        ShiftState::Open(shift) => reconcile(
            &shift.shift_id,
            shift.opening_float,
            shift.ledger.entries(),
            None,
        )
        .map(Some),
        ShiftState::Closed { shift, closing } => reconcile(
            &shift.shift_id,
            shift.opening_float,
            shift.ledger.entries(),
            Some(closing.declared_cash),
        )
        .map(Some),
    }
}
