use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::shifts::core::ledger::{AdjustmentKind, CashMovement, LedgerEntry, PaymentMethod};
use crate::modules::shifts::use_cases::post_movement::command::PostMovement;
use crate::modules::shifts::use_cases::post_movement::handler::{PostOutcome, PostedMovement};
use crate::shell::graphql::application_error;
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlPaymentMethod {
    Cash,
    Card,
    Transfer,
    Wallet,
}

impl From<GqlPaymentMethod> for PaymentMethod {
    fn from(m: GqlPaymentMethod) -> Self {
        match m {
            GqlPaymentMethod::Cash => PaymentMethod::Cash,
            GqlPaymentMethod::Card => PaymentMethod::Card,
            GqlPaymentMethod::Transfer => PaymentMethod::Transfer,
            GqlPaymentMethod::Wallet => PaymentMethod::Wallet,
        }
    }
}

impl From<PaymentMethod> for GqlPaymentMethod {
    fn from(m: PaymentMethod) -> Self {
        match m {
            PaymentMethod::Cash => GqlPaymentMethod::Cash,
            PaymentMethod::Card => GqlPaymentMethod::Card,
            PaymentMethod::Transfer => GqlPaymentMethod::Transfer,
            PaymentMethod::Wallet => GqlPaymentMethod::Wallet,
        }
    }
}

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlAdjustmentKind {
    Withdrawal,
    Deposit,
}

impl From<GqlAdjustmentKind> for AdjustmentKind {
    fn from(k: GqlAdjustmentKind) -> Self {
        match k {
            GqlAdjustmentKind::Withdrawal => AdjustmentKind::Withdrawal,
            GqlAdjustmentKind::Deposit => AdjustmentKind::Deposit,
        }
    }
}

impl From<AdjustmentKind> for GqlAdjustmentKind {
    fn from(k: AdjustmentKind) -> Self {
        match k {
            AdjustmentKind::Withdrawal => GqlAdjustmentKind::Withdrawal,
            AdjustmentKind::Deposit => GqlAdjustmentKind::Deposit,
        }
    }
}

/// Exactly one of `method` (payment) or `kind` (adjustment) must be set.
#[derive(InputObject)]
pub struct GqlMovementInput {
    pub method: Option<GqlPaymentMethod>,
    pub kind: Option<GqlAdjustmentKind>,
    pub amount: i64,
    pub reason: Option<String>,
    pub receipt_reference: Option<String>,
}

impl TryFrom<GqlMovementInput> for CashMovement {
    type Error = async_graphql::Error;

    fn try_from(input: GqlMovementInput) -> Result<Self, Self::Error> {
        match (input.method, input.kind) {
            (Some(method), None) => Ok(CashMovement::Payment {
                method: method.into(),
                amount: input.amount,
            }),
            (None, Some(kind)) => Ok(CashMovement::Adjustment {
                kind: kind.into(),
                amount: input.amount,
                reason: input.reason.unwrap_or_default(),
                receipt_reference: input.receipt_reference,
            }),
            _ => Err(async_graphql::Error::new(
                "movement needs exactly one of method or kind",
            )),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLedgerEntry {
    pub movement_id: ID,
    pub sequence: u64,
    pub idempotency_key: String,
    pub method: Option<GqlPaymentMethod>,
    pub kind: Option<GqlAdjustmentKind>,
    pub amount: i64,
    pub reason: Option<String>,
    pub receipt_reference: Option<String>,
    pub recorded_at: DateTime<Utc>,
    pub duplicate: bool,
}

impl GqlLedgerEntry {
    fn from_entry(entry: LedgerEntry, duplicate: bool) -> Self {
        let amount = entry.movement.amount();
        let (method, kind, reason, receipt_reference) = match entry.movement {
            CashMovement::Payment { method, .. } => (Some(method.into()), None, None, None),
            CashMovement::Adjustment {
                kind,
                reason,
                receipt_reference,
                ..
            } => (None, Some(kind.into()), Some(reason), receipt_reference),
        };
        Self {
            movement_id: ID(entry.movement_id),
            sequence: entry.sequence,
            idempotency_key: entry.idempotency_key,
            method,
            kind,
            amount,
            reason,
            receipt_reference,
            recorded_at: entry.recorded_at,
            duplicate,
        }
    }
}

impl From<PostedMovement> for GqlLedgerEntry {
    fn from(posted: PostedMovement) -> Self {
        Self::from_entry(posted.entry, posted.outcome == PostOutcome::Duplicate)
    }
}

#[derive(Default)]
pub struct PostMovementMutation;

#[Object]
impl PostMovementMutation {
    async fn post_movement(
        &self,
        context: &Context<'_>,
        shift_id: ID,
        idempotency_key: String,
        movement: GqlMovementInput,
    ) -> GqlResult<GqlLedgerEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = PostMovement {
            shift_id: shift_id.0,
            idempotency_key,
            movement: movement.try_into()?,
        };
        state
            .lifecycle
            .post_movement(command)
            .await
            .map(Into::into)
            .map_err(application_error)
    }
}
