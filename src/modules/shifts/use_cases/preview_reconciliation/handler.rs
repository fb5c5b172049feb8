use crate::modules::shifts::core::decision::DecideError;
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::reconciliation::{ReconciliationReport, report_for};
use crate::modules::shifts::core::state::{ShiftState, ShiftView};
use crate::modules::shifts::use_cases::lifecycle::{ApplicationError, ShiftLifecycle};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

impl<TEventStore, TOutbox> ShiftLifecycle<TEventStore, TOutbox>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    /// Read-only. Open shifts report no declaration; closed shifts report the
    /// figures they were closed with.
    pub async fn preview_reconciliation(
        &self,
        shift_id: &str,
    ) -> Result<ReconciliationReport, ApplicationError> {
        let (state, _) = self.load(shift_id).await?;
        let report = report_for(&state).map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        Ok(report.ok_or(DecideError::ShiftNotFound)?)
    }

    pub async fn shift(&self, shift_id: &str) -> Result<ShiftView, ApplicationError> {
        let (state, _) = self.load(shift_id).await?;
        Ok(state.view().ok_or(DecideError::ShiftNotFound)?)
    }

    pub async fn current_shift(
        &self,
        operator_id: &str,
        device_id: &str,
    ) -> Result<Option<String>, ApplicationError> {
        let Some(shift_id) = self
            .active_shifts
            .current(operator_id, device_id)
            .await
            .map_err(|e| ApplicationError::Index(e.to_string()))?
        else {
            return Ok(None);
        };
        // A binding can outlive its shift or precede its first event.
        let (state, _) = self.load(&shift_id).await?;
        Ok(matches!(state, ShiftState::Open(_)).then_some(shift_id))
    }
}
