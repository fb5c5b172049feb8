use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::shifts::core::state::{ShiftStatus, ShiftView};
use crate::modules::shifts::use_cases::open_shift::command::OpenShift;
use crate::shell::graphql::application_error;
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlShiftStatus {
    Open,
    Closed,
}

impl From<ShiftStatus> for GqlShiftStatus {
    fn from(status: ShiftStatus) -> Self {
        match status {
            ShiftStatus::Open => GqlShiftStatus::Open,
            ShiftStatus::Closed => GqlShiftStatus::Closed,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlShift {
    pub shift_id: ID,
    pub operator_id: String,
    pub device_id: String,
    pub sector_id: Option<String>,
    pub status: GqlShiftStatus,
    pub opening_float: i64,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closing_declared_cash: Option<i64>,
    pub movement_count: u64,
}

impl From<ShiftView> for GqlShift {
    fn from(v: ShiftView) -> Self {
        Self {
            shift_id: ID(v.shift_id),
            operator_id: v.operator_id,
            device_id: v.device_id,
            sector_id: v.sector_id,
            status: v.status.into(),
            opening_float: v.opening_float,
            opened_at: v.opened_at,
            closed_at: v.closed_at,
            closing_declared_cash: v.closing_declared_cash,
            movement_count: v.movements.len() as u64,
        }
    }
}

#[derive(Default)]
pub struct OpenShiftMutation;

#[Object]
impl OpenShiftMutation {
    async fn open_shift(
        &self,
        context: &Context<'_>,
        operator_id: String,
        device_id: String,
        opening_float: i64,
        sector_id: Option<String>,
        notes: Option<String>,
    ) -> GqlResult<GqlShift> {
        let state = context.data_unchecked::<AppState>();
        let command = OpenShift {
            operator_id,
            device_id,
            sector_id,
            opening_float,
            notes,
        };
        state
            .lifecycle
            .open_shift(command)
            .await
            .map(Into::into)
            .map_err(application_error)
    }
}
