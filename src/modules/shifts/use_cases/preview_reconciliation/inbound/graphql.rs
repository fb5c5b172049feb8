use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::shifts::core::reconciliation::{
    AdjustmentTotal, MethodTotal, ReconciliationReport,
};
use crate::modules::shifts::use_cases::open_shift::inbound::graphql::GqlShift;
use crate::modules::shifts::use_cases::post_movement::inbound::graphql::{
    GqlAdjustmentKind, GqlPaymentMethod,
};
use crate::shell::graphql::application_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMethodTotal {
    pub method: GqlPaymentMethod,
    pub count: u64,
    pub total: i64,
}

impl From<MethodTotal> for GqlMethodTotal {
    fn from(t: MethodTotal) -> Self {
        Self {
            method: t.method.into(),
            count: t.count,
            total: t.total,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAdjustmentTotal {
    pub kind: GqlAdjustmentKind,
    pub count: u64,
    pub total: i64,
}

impl From<AdjustmentTotal> for GqlAdjustmentTotal {
    fn from(t: AdjustmentTotal) -> Self {
        Self {
            kind: t.kind.into(),
            count: t.count,
            total: t.total,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReconciliation {
    pub shift_id: ID,
    pub opening_float: i64,
    pub payments: Vec<GqlMethodTotal>,
    pub adjustments: Vec<GqlAdjustmentTotal>,
    pub total_payments: i64,
    pub movement_count: u64,
    pub expected_cash: i64,
    pub declared_cash: Option<i64>,
    pub difference: Option<i64>,
}

impl From<ReconciliationReport> for GqlReconciliation {
    fn from(r: ReconciliationReport) -> Self {
        Self {
            shift_id: ID(r.shift_id),
            opening_float: r.opening_float,
            payments: r.payments.into_iter().map(Into::into).collect(),
            adjustments: r.adjustments.into_iter().map(Into::into).collect(),
            total_payments: r.total_payments,
            movement_count: r.movement_count,
            expected_cash: r.expected_cash,
            declared_cash: r.declared_cash,
            difference: r.difference,
        }
    }
}

#[derive(Default)]
pub struct ReconciliationQuery;

#[Object]
impl ReconciliationQuery {
    async fn reconciliation(&self, context: &Context<'_>, shift_id: ID) -> GqlResult<GqlReconciliation> {
        let state = context.data_unchecked::<AppState>();
        state
            .lifecycle
            .preview_reconciliation(&shift_id)
            .await
            .map(Into::into)
            .map_err(application_error)
    }

    async fn shift(&self, context: &Context<'_>, shift_id: ID) -> GqlResult<GqlShift> {
        let state = context.data_unchecked::<AppState>();
        state
            .lifecycle
            .shift(&shift_id)
            .await
            .map(Into::into)
            .map_err(application_error)
    }

    async fn current_shift(
        &self,
        context: &Context<'_>,
        operator_id: String,
        device_id: String,
    ) -> GqlResult<Option<ID>> {
        let state = context.data_unchecked::<AppState>();
        state
            .lifecycle
            .current_shift(&operator_id, &device_id)
            .await
            .map(|id| id.map(ID))
            .map_err(application_error)
    }
}
