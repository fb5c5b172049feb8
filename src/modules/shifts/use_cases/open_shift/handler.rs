use crate::modules::shifts::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::shifts::core::decision::{DecideError, Decision};
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::evolve::evolve;
use crate::modules::shifts::core::state::{ShiftState, ShiftStatus, ShiftView};
use crate::modules::shifts::use_cases::lifecycle::{ApplicationError, ShiftLifecycle, stream_id};
use crate::modules::shifts::use_cases::open_shift::command::OpenShift;
use crate::modules::shifts::use_cases::open_shift::decide::decide_open;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use uuid::Uuid;

impl<TEventStore, TOutbox> ShiftLifecycle<TEventStore, TOutbox>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    /// Opens a shift. At most one shift per (operator, device) is open at a
    /// time; the claim on the pair is a conditional write, so of two
    /// concurrent opens exactly one wins.
    #[tracing::instrument(skip(self, command), fields(operator_id = %command.operator_id, device_id = %command.device_id))]
    pub async fn open_shift(&self, command: OpenShift) -> Result<ShiftView, ApplicationError> {
        let opened_at = self.clock.now();
        self.resolver.active_operator(&command.operator_id).await?;
        if let Some(sector_id) = command.sector_id.as_deref() {
            self.resolver
                .authorize(&command.operator_id, sector_id, None, Some(opened_at))
                .await?;
        }

        let shift_id = Uuid::now_v7().to_string();
        let operator_id = command.operator_id.clone();
        let device_id = command.device_id.clone();
        let (events, intents) = match decide_open(&ShiftState::None, command, &shift_id, opened_at) {
            Decision::Accepted { events, intents } => (events, intents),
            Decision::Rejected { reason } => return Err(reason.into()),
            Decision::AlreadyApplied => {
                return Err(ApplicationError::Unexpected(
                    "open decided as already applied".into(),
                ));
            }
        };

        self.claim_pair(&operator_id, &device_id, &shift_id).await?;

        let stream = stream_id(&shift_id);
        if let Err(err) = self.event_store.append(&stream, 0, &events).await {
            self.release_pair(&operator_id, &device_id, &shift_id).await;
            return Err(err.into());
        }
        dispatch_intents(&*self.outbox, &stream, 0, &self.topic, opened_at, intents).await?;

        let state = events.into_iter().fold(ShiftState::None, evolve);
        tracing::info!(shift_id, "shift opened");
        state
            .view()
            .ok_or_else(|| ApplicationError::Unexpected("opened shift has no view".into()))
    }

    /// Binds the pair to `shift_id`. A binding left behind by a shift that is
    /// already closed is taken over.
    async fn claim_pair(
        &self,
        operator_id: &str,
        device_id: &str,
        shift_id: &str,
    ) -> Result<(), ApplicationError> {
        let index = &self.active_shifts;
        if index
            .compare_and_set(operator_id, device_id, None, Some(shift_id))
            .await
            .map_err(|e| ApplicationError::Index(e.to_string()))?
        {
            return Ok(());
        }

        let holder = index
            .current(operator_id, device_id)
            .await
            .map_err(|e| ApplicationError::Index(e.to_string()))?;
        let stale = match holder.as_deref() {
            Some(holder_id) => {
                let (state, _) = self.load(holder_id).await?;
                state.status() == Some(ShiftStatus::Closed)
            }
            // Released in between; try the fresh claim once more.
            None => true,
        };
        if stale
            && index
                .compare_and_set(operator_id, device_id, holder.as_deref(), Some(shift_id))
                .await
                .map_err(|e| ApplicationError::Index(e.to_string()))?
        {
            tracing::debug!(?holder, "took over a stale binding");
            return Ok(());
        }

        tracing::warn!(?holder, "shift already open for operator and device");
        Err(DecideError::ShiftAlreadyOpen.into())
    }

    pub(crate) async fn release_pair(&self, operator_id: &str, device_id: &str, shift_id: &str) {
        if let Err(err) = self
            .active_shifts
            .compare_and_set(operator_id, device_id, Some(shift_id), None)
            .await
        {
            tracing::warn!(shift_id, error = %err, "could not release operator/device binding");
        }
    }
}
