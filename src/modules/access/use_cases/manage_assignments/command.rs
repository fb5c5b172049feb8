use crate::shared::core::primitives::Timestamp;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GrantAssignment {
    pub operator_id: String,
    pub sector_id: String,
    #[serde(default)]
    pub street_id: Option<String>,
    pub valid_from: Timestamp,
    #[serde(default)]
    pub valid_to: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevokeAssignment {
    pub assignment_id: String,
    /// Defaults to now.
    #[serde(default)]
    pub at: Option<Timestamp>,
}
