use crate::modules::shifts::core::decision::DecideError;
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::ledger::CashMovement;
use crate::modules::shifts::use_cases::capture_payment::command::CapturePayment;
use crate::modules::shifts::use_cases::lifecycle::{ApplicationError, ShiftLifecycle};
use crate::modules::shifts::use_cases::post_movement::command::PostMovement;
use crate::modules::shifts::use_cases::post_movement::handler::PostedMovement;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

impl<TEventStore, TOutbox> ShiftLifecycle<TEventStore, TOutbox>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    /// Authorizes the operator for the location, then records the payment on
    /// their shift.
    #[tracing::instrument(skip(self, command), fields(shift_id = %command.shift_id, operator_id = %command.operator_id))]
    pub async fn capture_payment(
        &self,
        command: CapturePayment,
    ) -> Result<PostedMovement, ApplicationError> {
        self.resolver
            .authorize(
                &command.operator_id,
                &command.sector_id,
                command.street_id.as_deref(),
                None,
            )
            .await?;

        let (state, _) = self.load(&command.shift_id).await?;
        let shift = state.record().ok_or(DecideError::ShiftNotFound)?;
        if shift.operator_id != command.operator_id {
            tracing::warn!(owner = %shift.operator_id, "payment captured on another operator's shift");
            return Err(DecideError::ShiftOperatorMismatch.into());
        }

        self.post_movement(PostMovement {
            shift_id: command.shift_id,
            idempotency_key: command.idempotency_key,
            movement: CashMovement::Payment {
                method: command.method,
                amount: command.amount,
            },
        })
        .await
    }
}
