// Command and ledger builders for shift tests.

use crate::modules::shifts::core::ledger::{
    AdjustmentKind, CashMovement, LedgerEntry, PaymentMethod, ShiftLedger,
};
use crate::modules::shifts::core::state::ShiftRecord;
use crate::modules::shifts::use_cases::capture_payment::command::CapturePayment;
use crate::modules::shifts::use_cases::open_shift::command::OpenShift;
use crate::modules::shifts::use_cases::post_movement::command::PostMovement;
use crate::shared::core::primitives::Cents;
use crate::tests::fixtures::directory::at;

pub fn cash(amount: Cents) -> CashMovement {
    CashMovement::Payment {
        method: PaymentMethod::Cash,
        amount,
    }
}

pub fn card(amount: Cents) -> CashMovement {
    CashMovement::Payment {
        method: PaymentMethod::Card,
        amount,
    }
}

pub fn withdrawal(amount: Cents) -> CashMovement {
    CashMovement::Adjustment {
        kind: AdjustmentKind::Withdrawal,
        amount,
        reason: "safe drop".to_string(),
        receipt_reference: None,
    }
}

pub fn deposit(amount: Cents) -> CashMovement {
    CashMovement::Adjustment {
        kind: AdjustmentKind::Deposit,
        amount,
        reason: "change top-up".to_string(),
        receipt_reference: Some("rcpt-001".to_string()),
    }
}

pub fn entry(sequence: u64, idempotency_key: &str, movement: CashMovement) -> LedgerEntry {
    LedgerEntry {
        movement_id: format!("mv-{sequence}"),
        sequence,
        idempotency_key: idempotency_key.to_string(),
        movement,
        recorded_at: at(2024, 6, 1),
    }
}

pub fn post(shift_id: &str, idempotency_key: &str, movement: CashMovement) -> PostMovement {
    PostMovement {
        shift_id: shift_id.to_string(),
        idempotency_key: idempotency_key.to_string(),
        movement,
    }
}

pub fn open_record(shift_id: &str, opening_float: Cents) -> ShiftRecord {
    ShiftRecord {
        shift_id: shift_id.to_string(),
        operator_id: "op-ana".to_string(),
        device_id: "dev-1".to_string(),
        sector_id: None,
        opening_float,
        opened_at: at(2024, 6, 1),
        notes: None,
        ledger: ShiftLedger::new(),
    }
}

pub struct OpenShiftBuilder {
    inner: OpenShift,
}

impl Default for OpenShiftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl OpenShiftBuilder {
    pub fn new() -> Self {
        Self {
            inner: OpenShift {
                operator_id: "op-ana".to_string(),
                device_id: "dev-1".to_string(),
                sector_id: None,
                opening_float: 10_000,
                notes: None,
            },
        }
    }

    pub fn operator_id(mut self, v: impl Into<String>) -> Self {
        self.inner.operator_id = v.into();
        self
    }

    pub fn device_id(mut self, v: impl Into<String>) -> Self {
        self.inner.device_id = v.into();
        self
    }

    pub fn sector_id(mut self, v: impl Into<String>) -> Self {
        self.inner.sector_id = Some(v.into());
        self
    }

    pub fn opening_float(mut self, v: Cents) -> Self {
        self.inner.opening_float = v;
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn build(self) -> OpenShift {
        self.inner
    }
}

/// Defaults to a 500 cent CASH payment by op-ana on st-main.
pub struct CapturePaymentBuilder {
    inner: CapturePayment,
}

#[allow(dead_code)]
impl CapturePaymentBuilder {
    pub fn new(shift_id: &str) -> Self {
        Self {
            inner: CapturePayment {
                shift_id: shift_id.to_string(),
                operator_id: "op-ana".to_string(),
                sector_id: "sec-center".to_string(),
                street_id: Some("st-main".to_string()),
                method: PaymentMethod::Cash,
                amount: 500,
                idempotency_key: "pay-1".to_string(),
            },
        }
    }

    pub fn street_id(mut self, v: Option<&str>) -> Self {
        self.inner.street_id = v.map(str::to_string);
        self
    }

    pub fn method(mut self, v: PaymentMethod) -> Self {
        self.inner.method = v;
        self
    }

    pub fn amount(mut self, v: Cents) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn idempotency_key(mut self, v: impl Into<String>) -> Self {
        self.inner.idempotency_key = v.into();
        self
    }

    pub fn build(self) -> CapturePayment {
        self.inner
    }
}
