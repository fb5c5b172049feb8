use crate::shared::core::primitives::Cents;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CloseShift {
    pub shift_id: String,
    pub closing_declared_cash: Cents,
    #[serde(default)]
    pub notes: Option<String>,
}
