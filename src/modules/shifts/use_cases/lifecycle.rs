// Shift lifecycle application service.
//
// Responsibilities
// - Sole writer of shift streams. Every mutation is load -> fold -> decide ->
//   conditional append, re-evaluated when another writer got there first.
// - Keeps the (operator, device) -> open shift index in step with the streams.
//
// The per-use-case handlers (open_shift, post_movement, close_shift, ...)
// extend this type with their entry points.

use crate::modules::access::core::errors::AccessError;
use crate::modules::access::use_cases::check_access::handler::AuthorizationResolver;
use crate::modules::shifts::adapters::outbound::active_shifts::ActiveShiftIndex;
use crate::modules::shifts::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::shifts::core::decision::{DecideError, Decision};
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::core::evolve::evolve;
use crate::modules::shifts::core::state::ShiftState;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("active shift index error: {0}")]
    Index(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::Store(EventStoreError::VersionMismatch { .. }) => "CONCURRENT_UPDATE",
            ApplicationError::Store(_) | ApplicationError::Outbox(_) | ApplicationError::Index(_) => {
                "BACKEND"
            }
            ApplicationError::Rejected(reason) => reason.code(),
            ApplicationError::Access(reason) => reason.code(),
            ApplicationError::Unexpected(_) => "UNEXPECTED",
        }
    }
}

pub fn stream_id(shift_id: &str) -> String {
    format!("Shift-{shift_id}")
}

/// Outcome of a committed command.
#[derive(Debug)]
pub struct Committed {
    pub state: ShiftState,
    pub version: i64,
    pub appended: bool,
}

pub struct ShiftLifecycle<TEventStore, TOutbox>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub(crate) topic: String,
    pub(crate) event_store: Arc<TEventStore>,
    pub(crate) outbox: Arc<TOutbox>,
    pub(crate) active_shifts: Arc<dyn ActiveShiftIndex>,
    pub(crate) resolver: Arc<AuthorizationResolver>,
    pub(crate) clock: Arc<dyn Clock>,
    max_append_attempts: u32,
    stream_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<TEventStore, TOutbox> ShiftLifecycle<TEventStore, TOutbox>
where
    TEventStore: EventStore<ShiftEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        active_shifts: Arc<dyn ActiveShiftIndex>,
        resolver: Arc<AuthorizationResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            active_shifts,
            resolver,
            clock,
            max_append_attempts: 5,
            stream_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_max_append_attempts(mut self, attempts: u32) -> Self {
        self.max_append_attempts = attempts.max(1);
        self
    }

    pub async fn load(&self, shift_id: &str) -> Result<(ShiftState, i64), ApplicationError> {
        let stream = self.event_store.load(&stream_id(shift_id)).await?;
        let state = stream.events.into_iter().fold(ShiftState::None, evolve);
        Ok((state, stream.version))
    }

    async fn stream_lock(&self, shift_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.stream_locks.lock().await;
        locks.entry(shift_id.to_string()).or_default().clone()
    }

    /// Runs `decide` against the current stream and appends its events at the
    /// version it was decided on. Writers through this service are serialized
    /// per shift. A version conflict can still come from another process
    /// sharing the store; the decision is then re-made on the fresh stream.
    pub(crate) async fn execute<F>(
        &self,
        shift_id: &str,
        decide: F,
    ) -> Result<Committed, ApplicationError>
    where
        F: Fn(&ShiftState) -> Decision + Send + Sync,
    {
        let stream = stream_id(shift_id);
        let lock = self.stream_lock(shift_id).await;
        let _guard = lock.lock().await;
        let mut attempt = 1;
        loop {
            let (state, version) = self.load(shift_id).await?;
            let (events, intents) = match decide(&state) {
                Decision::Accepted { events, intents } => (events, intents),
                Decision::AlreadyApplied => {
                    return Ok(Committed {
                        state,
                        version,
                        appended: false,
                    });
                }
                Decision::Rejected { reason } => {
                    tracing::warn!(shift_id, %reason, "command rejected");
                    return Err(reason.into());
                }
            };

            match self.event_store.append(&stream, version, &events).await {
                Ok(()) => {
                    dispatch_intents(
                        &*self.outbox,
                        &stream,
                        version,
                        &self.topic,
                        self.clock.now(),
                        intents,
                    )
                    .await?;
                    let appended_count = events.len() as i64;
                    let state = events.into_iter().fold(state, evolve);
                    return Ok(Committed {
                        state,
                        version: version + appended_count,
                        appended: true,
                    });
                }
                Err(EventStoreError::VersionMismatch { expected, actual })
                    if attempt < self.max_append_attempts =>
                {
                    tracing::debug!(shift_id, attempt, expected, actual, "version conflict, re-deciding");
                    attempt += 1;
                }
                Err(err) => {
                    tracing::warn!(shift_id, attempt, error = %err, "append failed");
                    return Err(err.into());
                }
            }
        }
    }
}
