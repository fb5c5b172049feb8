use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Which shift currently holds each (operator, device) pair.
#[async_trait]
pub trait ActiveShiftIndex: Send + Sync {
    async fn current(&self, operator_id: &str, device_id: &str) -> anyhow::Result<Option<String>>;

    /// Atomically rebinds the pair to `next` only if it is currently bound to
    /// `expected` (`None` meaning unbound). Returns whether the swap happened.
    async fn compare_and_set(
        &self,
        operator_id: &str,
        device_id: &str,
        expected: Option<&str>,
        next: Option<&str>,
    ) -> anyhow::Result<bool>;
}

#[derive(Default)]
pub struct InMemoryActiveShifts {
    slots: Mutex<HashMap<(String, String), String>>,
    offline: bool,
}

impl InMemoryActiveShifts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.offline {
            anyhow::bail!("Active shift index offline");
        }
        Ok(())
    }
}

#[async_trait]
impl ActiveShiftIndex for InMemoryActiveShifts {
    async fn current(&self, operator_id: &str, device_id: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online()?;
        let key = (operator_id.to_string(), device_id.to_string());
        Ok(self.slots.lock().await.get(&key).cloned())
    }

    async fn compare_and_set(
        &self,
        operator_id: &str,
        device_id: &str,
        expected: Option<&str>,
        next: Option<&str>,
    ) -> anyhow::Result<bool> {
        self.ensure_online()?;
        let key = (operator_id.to_string(), device_id.to_string());
        let mut slots = self.slots.lock().await;
        if slots.get(&key).map(String::as_str) != expected {
            return Ok(false);
        }
        match next {
            Some(shift_id) => slots.insert(key, shift_id.to_string()),
            None => slots.remove(&key),
        };
        Ok(true)
    }
}
