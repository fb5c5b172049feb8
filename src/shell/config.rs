use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_APPEND_ATTEMPTS: u32 = 5;
pub const DEFAULT_OUTBOX_TOPIC: &str = "parking-ops.shifts.v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value} is not a socket address")]
    InvalidAddr { key: &'static str, value: String },

    #[error("{key}={value} must be a whole number of at least 1")]
    InvalidAttempts { key: &'static str, value: String },

    #[error("{key} must not be blank")]
    Blank { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_append_attempts: u32,
    pub outbox_topic: String,
    pub directory_seed: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset and empty variables fall back to their defaults, except the
    /// outbox topic, which must not be blank when set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.is_empty());

        const ADDR: &str = "PARKING_OPS_ADDR";
        let addr_raw = read(ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                key: ADDR,
                value: addr_raw.clone(),
            })?;

        const ATTEMPTS: &str = "PARKING_OPS_SHIFT_APPEND_MAX_ATTEMPTS";
        let max_append_attempts = match read(ATTEMPTS) {
            None => DEFAULT_MAX_APPEND_ATTEMPTS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ConfigError::InvalidAttempts {
                        key: ATTEMPTS,
                        value: raw,
                    });
                }
            },
        };

        const TOPIC: &str = "PARKING_OPS_OUTBOX_TOPIC";
        let outbox_topic = match lookup(TOPIC) {
            None => DEFAULT_OUTBOX_TOPIC.to_string(),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::Blank { key: TOPIC }),
            Some(raw) => raw.trim().to_string(),
        };

        let directory_seed = read("PARKING_OPS_DIRECTORY_SEED").map(PathBuf::from);

        Ok(Self {
            addr,
            max_append_attempts,
            outbox_topic,
            directory_seed,
        })
    }
}
