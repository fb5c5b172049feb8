use crate::shared::core::primitives::Cents;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpenShift {
    pub operator_id: String,
    pub device_id: String,
    #[serde(default)]
    pub sector_id: Option<String>,
    pub opening_float: Cents,
    #[serde(default)]
    pub notes: Option<String>,
}
