use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("operator {0} not found")]
    OperatorNotFound(String),

    #[error("sector {0} not found")]
    SectorNotFound(String),

    #[error("street {0} not found")]
    StreetNotFound(String),

    #[error("assignment {0} not found")]
    AssignmentNotFound(String),

    #[error("street {street_id} does not belong to sector {sector_id}")]
    InvalidHierarchy { sector_id: String, street_id: String },

    #[error("operator {0} is not active")]
    OperatorInactive(String),

    #[error("assignment window must end after it starts")]
    InvalidWindow,

    #[error("operator {operator_id} is not authorized for sector {sector_id}")]
    Unauthorized {
        operator_id: String,
        sector_id: String,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

impl AccessError {
    /// Stable machine-readable kind, one per variant.
    pub fn code(&self) -> &'static str {
        match self {
            AccessError::OperatorNotFound(_) => "OPERATOR_NOT_FOUND",
            AccessError::SectorNotFound(_) => "SECTOR_NOT_FOUND",
            AccessError::StreetNotFound(_) => "STREET_NOT_FOUND",
            AccessError::AssignmentNotFound(_) => "ASSIGNMENT_NOT_FOUND",
            AccessError::InvalidHierarchy { .. } => "INVALID_HIERARCHY",
            AccessError::OperatorInactive(_) => "OPERATOR_INACTIVE",
            AccessError::InvalidWindow => "INVALID_WINDOW",
            AccessError::Unauthorized { .. } => "UNAUTHORIZED",
            AccessError::Backend(_) => "BACKEND",
        }
    }
}

impl From<anyhow::Error> for AccessError {
    fn from(err: anyhow::Error) -> Self {
        AccessError::Backend(err.to_string())
    }
}
