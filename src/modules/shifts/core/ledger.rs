use crate::shared::core::primitives::{Cents, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Wallet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentKind {
    Withdrawal,
    Deposit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashMovement {
    Payment {
        method: PaymentMethod,
        amount: Cents,
    },
    Adjustment {
        kind: AdjustmentKind,
        amount: Cents,
        reason: String,
        #[serde(default)]
        receipt_reference: Option<String>,
    },
}

impl CashMovement {
    pub fn amount(&self) -> Cents {
        match self {
            CashMovement::Payment { amount, .. } | CashMovement::Adjustment { amount, .. } => {
                *amount
            }
        }
    }

    /// Signed effect on the cash the operator should be holding.
    pub fn cash_effect(&self) -> Cents {
        match self {
            CashMovement::Payment {
                method: PaymentMethod::Cash,
                amount,
            } => *amount,
            CashMovement::Payment { .. } => 0,
            CashMovement::Adjustment {
                kind: AdjustmentKind::Deposit,
                amount,
                ..
            } => *amount,
            CashMovement::Adjustment {
                kind: AdjustmentKind::Withdrawal,
                amount,
                ..
            } => -*amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub movement_id: String,
    /// 1-based position in the shift's ledger.
    pub sequence: u64,
    pub idempotency_key: String,
    pub movement: CashMovement,
    pub recorded_at: Timestamp,
}

/// Append-only list of a shift's cash movements. Entries are never edited
/// or removed; corrections are new entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftLedger {
    entries: Vec<LedgerEntry>,
}

impl ShiftLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_sequence(&self) -> u64 {
        self.entries.len() as u64 + 1
    }

    pub fn find_by_key(&self, idempotency_key: &str) -> Option<&LedgerEntry> {
        self.entries
            .iter()
            .find(|entry| entry.idempotency_key == idempotency_key)
    }

    /// `None` once the running sum leaves the representable range.
    pub fn cash_delta(&self) -> Option<Cents> {
        self.entries
            .iter()
            .try_fold(0 as Cents, |sum, entry| sum.checked_add(entry.movement.cash_effect()))
    }

    pub(crate) fn push(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }
}
