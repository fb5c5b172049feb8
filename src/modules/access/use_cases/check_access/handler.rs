use crate::modules::access::adapters::outbound::assignment_store::AssignmentStore;
use crate::modules::access::adapters::outbound::directory::Directory;
use crate::modules::access::core::errors::AccessError;
use crate::modules::access::core::model::{Operator, Sector};
use crate::modules::access::core::rules::grants_access;
use crate::shared::core::primitives::{Clock, Timestamp};
use std::sync::Arc;

/// Decides whether an operator may act on a sector (or a street in it) at a
/// given instant. Read-only: it never writes to the assignment store.
pub struct AuthorizationResolver {
    directory: Arc<dyn Directory>,
    assignments: Arc<dyn AssignmentStore>,
    clock: Arc<dyn Clock>,
}

impl AuthorizationResolver {
    pub fn new(
        directory: Arc<dyn Directory>,
        assignments: Arc<dyn AssignmentStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory,
            assignments,
            clock,
        }
    }

    /// `at` defaults to the injected clock.
    #[tracing::instrument(skip(self))]
    pub async fn can_access(
        &self,
        operator_id: &str,
        sector_id: &str,
        street_id: Option<&str>,
        at: Option<Timestamp>,
    ) -> Result<bool, AccessError> {
        let at = at.unwrap_or_else(|| self.clock.now());
        let sector = self.resolve_scope(sector_id, street_id).await?;
        self.active_operator(operator_id).await?;

        if sector.is_private {
            tracing::debug!("private sector, no assignment lookup");
            return Ok(true);
        }

        let assignments = self.assignments.list_for(operator_id, sector_id).await?;
        let allowed = grants_access(&assignments, sector_id, street_id, at);
        tracing::debug!(allowed, candidates = assignments.len(), "access resolved");
        Ok(allowed)
    }

    /// Same as `can_access`, with a denial turned into `Unauthorized`.
    pub async fn authorize(
        &self,
        operator_id: &str,
        sector_id: &str,
        street_id: Option<&str>,
        at: Option<Timestamp>,
    ) -> Result<(), AccessError> {
        if self.can_access(operator_id, sector_id, street_id, at).await? {
            return Ok(());
        }
        tracing::warn!(operator_id, sector_id, ?street_id, "access denied");
        Err(AccessError::Unauthorized {
            operator_id: operator_id.to_string(),
            sector_id: sector_id.to_string(),
        })
    }

    pub async fn active_operator(&self, operator_id: &str) -> Result<Operator, AccessError> {
        let operator = self
            .directory
            .get_operator(operator_id)
            .await?
            .ok_or_else(|| AccessError::OperatorNotFound(operator_id.to_string()))?;
        if !operator.is_active() {
            return Err(AccessError::OperatorInactive(operator_id.to_string()));
        }
        Ok(operator)
    }

    /// Loads the sector and, when given, checks the street sits under it.
    pub async fn resolve_scope(
        &self,
        sector_id: &str,
        street_id: Option<&str>,
    ) -> Result<Sector, AccessError> {
        let sector = self
            .directory
            .get_sector(sector_id)
            .await?
            .ok_or_else(|| AccessError::SectorNotFound(sector_id.to_string()))?;
        if let Some(street_id) = street_id {
            let street = self
                .directory
                .get_street(street_id)
                .await?
                .ok_or_else(|| AccessError::StreetNotFound(street_id.to_string()))?;
            if street.sector_id != sector.sector_id {
                return Err(AccessError::InvalidHierarchy {
                    sector_id: sector_id.to_string(),
                    street_id: street_id.to_string(),
                });
            }
        }
        Ok(sector)
    }
}
