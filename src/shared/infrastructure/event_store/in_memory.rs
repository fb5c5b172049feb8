// In memory implementation of the EventStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store events per stream in memory.
// - Enforce optimistic concurrency by checking the expected version.
// - Offer fault injection (offline, delayed appends) for tests.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<HashMap<String, Vec<Event>>>,
    offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Sleeps before taking the write lock so concurrent writers interleave
    /// between their load and their append.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let events = guard.get(stream_id).cloned().unwrap_or_default();
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        let entry = guard.entry(stream_id.to_string()).or_default();
        let actual = entry.len() as i64;
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        entry.extend_from_slice(new_events);
        Ok(())
    }
}
