use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::reconciliation::{ReconciliationReport, report_for};
use crate::modules::shifts::use_cases::close_shift::command::CloseShift;
use crate::modules::shifts::use_cases::close_shift::decide::decide_close;
use crate::modules::shifts::use_cases::lifecycle::{ApplicationError, ShiftLifecycle};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

impl<TEventStore, TOutbox> ShiftLifecycle<TEventStore, TOutbox>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    /// Closes an open shift against the declared cash. Terminal: a closed
    /// shift never reopens and a second close fails `ShiftNotOpen`.
    #[tracing::instrument(skip(self, command), fields(shift_id = %command.shift_id))]
    pub async fn close_shift(
        &self,
        command: CloseShift,
    ) -> Result<ReconciliationReport, ApplicationError> {
        let closed_at = self.clock.now();
        let shift_id = command.shift_id.clone();
        let committed = self
            .execute(&shift_id, |state| decide_close(state, command.clone(), closed_at))
            .await?;

        let shift = committed
            .state
            .record()
            .ok_or_else(|| ApplicationError::Unexpected("closed shift has no record".into()))?;
        self.release_pair(&shift.operator_id, &shift.device_id, &shift.shift_id)
            .await;

        let report = report_for(&committed.state)
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?
            .ok_or_else(|| ApplicationError::Unexpected("closed shift has no report".into()))?;
        tracing::info!(
            expected_cash = report.expected_cash,
            declared_cash = ?report.declared_cash,
            difference = ?report.difference,
            "shift closed"
        );
        Ok(report)
    }
}
