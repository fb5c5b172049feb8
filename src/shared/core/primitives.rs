use chrono::{DateTime, Duration, Utc};
use std::sync::RwLock;

/// Money in minor currency units.
pub type Cents = i64;

pub type Timestamp = DateTime<Utc>;

/// Source of the current instant. Injected everywhere "now" matters so
/// boundary behaviour can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    instant: RwLock<Timestamp>,
}

impl FixedClock {
    pub fn new(instant: Timestamp) -> Self {
        Self {
            instant: RwLock::new(instant),
        }
    }

    pub fn set(&self, instant: Timestamp) {
        let mut guard = self.instant.write().unwrap_or_else(|e| e.into_inner());
        *guard = instant;
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.instant.write().unwrap_or_else(|e| e.into_inner());
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.instant.read().unwrap_or_else(|e| e.into_inner())
    }
}
