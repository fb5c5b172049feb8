use crate::modules::access::core::errors::AccessError;
use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatorStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub operator_id: String,
    pub name: String,
    pub status: OperatorStatus,
}

impl Operator {
    pub fn is_active(&self) -> bool {
        self.status == OperatorStatus::Active
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub sector_id: String,
    pub name: String,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub street_id: String,
    pub sector_id: String,
    pub name: String,
}

/// Grants one operator access to one sector, optionally narrowed to one
/// street, from `valid_from` until `valid_to` (open-ended when `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorAssignment {
    pub assignment_id: String,
    pub operator_id: String,
    pub sector_id: String,
    pub street_id: Option<String>,
    pub valid_from: Timestamp,
    pub valid_to: Option<Timestamp>,
}

impl OperatorAssignment {
    pub fn new(
        assignment_id: impl Into<String>,
        operator_id: impl Into<String>,
        sector_id: impl Into<String>,
        street_id: Option<String>,
        valid_from: Timestamp,
        valid_to: Option<Timestamp>,
    ) -> Result<Self, AccessError> {
        let assignment = Self {
            assignment_id: assignment_id.into(),
            operator_id: operator_id.into(),
            sector_id: sector_id.into(),
            street_id,
            valid_from,
            valid_to,
        };
        assignment.validate_window()?;
        Ok(assignment)
    }

    pub fn validate_window(&self) -> Result<(), AccessError> {
        match self.valid_to {
            Some(to) if to <= self.valid_from => Err(AccessError::InvalidWindow),
            _ => Ok(()),
        }
    }

    /// Both bounds are inclusive: an assignment is still valid at the exact
    /// `valid_to` instant.
    pub fn is_valid_at(&self, at: Timestamp) -> bool {
        self.valid_from <= at && self.valid_to.is_none_or(|to| at <= to)
    }

    /// Sector-wide grants cover every street in the sector; street grants
    /// only cover their own street and never a sector-wide request.
    pub fn covers(&self, sector_id: &str, street_id: Option<&str>) -> bool {
        if self.sector_id != sector_id {
            return false;
        }
        match (self.street_id.as_deref(), street_id) {
            (None, _) => true,
            (Some(granted), Some(requested)) => granted == requested,
            (Some(_), None) => false,
        }
    }

    /// Closes the window at `at`. An earlier existing end is kept.
    pub fn revoke(&mut self, at: Timestamp) -> Result<(), AccessError> {
        if at <= self.valid_from {
            return Err(AccessError::InvalidWindow);
        }
        self.valid_to = Some(match self.valid_to {
            Some(existing) if existing < at => existing,
            _ => at,
        });
        Ok(())
    }
}
