use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
struct OutboxLog {
    rows: Vec<OutboxRow>,
    // (stream_id, stream_version) already enqueued
    positions: HashSet<(String, i64)>,
}

/// Outbox kept in process memory. Rows stay in enqueue order; a second row
/// for the same stream position is refused.
#[derive(Default)]
pub struct InMemoryDomainOutbox {
    log: Mutex<OutboxLog>,
    offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn rows(&self) -> Vec<OutboxRow> {
        self.log.lock().await.rows.clone()
    }

    pub async fn rows_of_type(&self, event_type: &str) -> Vec<OutboxRow> {
        self.log
            .lock()
            .await
            .rows
            .iter()
            .filter(|row| row.event_type == event_type)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.offline {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }
        let mut log = self.log.lock().await;
        if !log
            .positions
            .insert((row.stream_id.clone(), row.stream_version))
        {
            return Err(OutboxError::Duplicate {
                stream_id: row.stream_id,
                stream_version: row.stream_version,
            });
        }
        log.rows.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_domain_outbox_tests {
    use super::*;
    use chrono::Utc;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> OutboxRow {
        OutboxRow {
            topic: "test_topic".to_string(),
            event_type: "ShiftClosed".to_string(),
            event_version: 1,
            stream_id: "Shift-123".to_string(),
            stream_version: 3,
            occurred_at: Utc::now(),
            payload: serde_json::json!({ "shift_id": "123" }),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_the_row(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        assert!(outbox.enqueue(row).await.is_ok());
        assert_eq!(outbox.rows().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_second_row_for_the_same_position(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        outbox.enqueue(row.clone()).await.expect("first enqueue failed");
        let result = outbox.enqueue(row).await;
        assert!(matches!(
            result,
            Err(OutboxError::Duplicate {
                stream_id: _,
                stream_version: 3
            })
        ));
        assert_eq!(outbox.rows().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_filter_rows_by_event_type(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        let mut opened = row.clone();
        opened.event_type = "ShiftOpened".into();
        opened.stream_version = 1;
        outbox.enqueue(opened).await.unwrap();
        outbox.enqueue(row).await.unwrap();
        let closed = outbox.rows_of_type("ShiftClosed").await;
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].stream_version, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline(row: OutboxRow) {
        let mut outbox = InMemoryDomainOutbox::new();
        outbox.toggle_offline();
        assert!(matches!(
            outbox.enqueue(row).await,
            Err(OutboxError::Backend(_))
        ));
    }
}
