use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::shifts::use_cases::close_shift::command::CloseShift;
use crate::modules::shifts::use_cases::preview_reconciliation::inbound::graphql::GqlReconciliation;
use crate::shell::graphql::application_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CloseShiftMutation;

#[Object]
impl CloseShiftMutation {
    async fn close_shift(
        &self,
        context: &Context<'_>,
        shift_id: ID,
        closing_declared_cash: i64,
        notes: Option<String>,
    ) -> GqlResult<GqlReconciliation> {
        let state = context.data_unchecked::<AppState>();
        let command = CloseShift {
            shift_id: shift_id.0,
            closing_declared_cash,
            notes,
        };
        state
            .lifecycle
            .close_shift(command)
            .await
            .map(Into::into)
            .map_err(application_error)
    }
}
