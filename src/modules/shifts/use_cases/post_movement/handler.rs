use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::ledger::LedgerEntry;
use crate::modules::shifts::use_cases::lifecycle::{ApplicationError, ShiftLifecycle};
use crate::modules::shifts::use_cases::post_movement::command::PostMovement;
use crate::modules::shifts::use_cases::post_movement::decide::decide_post;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostOutcome {
    Recorded,
    /// The idempotency key had already been recorded; nothing was appended.
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostedMovement {
    pub outcome: PostOutcome,
    pub entry: LedgerEntry,
}

impl<TEventStore, TOutbox> ShiftLifecycle<TEventStore, TOutbox>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    /// Appends one movement to an open shift's ledger. Concurrent posts to the
    /// same shift are serialized by the stream version; each lands exactly
    /// once with its own sequence number.
    #[tracing::instrument(skip(self, command), fields(shift_id = %command.shift_id, idempotency_key = %command.idempotency_key))]
    pub async fn post_movement(
        &self,
        command: PostMovement,
    ) -> Result<PostedMovement, ApplicationError> {
        let movement_id = Uuid::now_v7().to_string();
        let recorded_at = self.clock.now();
        let key = command.idempotency_key.clone();
        let shift_id = command.shift_id.clone();

        let committed = self
            .execute(&shift_id, |state| {
                decide_post(state, command.clone(), &movement_id, recorded_at)
            })
            .await?;

        let entry = committed
            .state
            .record()
            .and_then(|shift| shift.ledger.find_by_key(&key))
            .cloned()
            .ok_or_else(|| ApplicationError::Unexpected(format!("movement {key} missing after post")))?;

        let outcome = if committed.appended {
            tracing::info!(sequence = entry.sequence, "movement recorded");
            PostOutcome::Recorded
        } else {
            tracing::info!(sequence = entry.sequence, "duplicate movement ignored");
            PostOutcome::Duplicate
        };
        Ok(PostedMovement { outcome, entry })
    }
}
