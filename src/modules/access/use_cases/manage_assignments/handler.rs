use crate::modules::access::adapters::outbound::assignment_store::AssignmentStore;
use crate::modules::access::core::errors::AccessError;
use crate::modules::access::core::model::OperatorAssignment;
use crate::modules::access::use_cases::check_access::handler::AuthorizationResolver;
use crate::modules::access::use_cases::manage_assignments::command::{
    GrantAssignment, RevokeAssignment,
};
use crate::shared::core::primitives::Clock;
use std::sync::Arc;
use uuid::Uuid;

/// Write side of the assignment store.
pub struct AssignmentManager {
    resolver: Arc<AuthorizationResolver>,
    assignments: Arc<dyn AssignmentStore>,
    clock: Arc<dyn Clock>,
}

impl AssignmentManager {
    pub fn new(
        resolver: Arc<AuthorizationResolver>,
        assignments: Arc<dyn AssignmentStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver,
            assignments,
            clock,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn grant(&self, command: GrantAssignment) -> Result<OperatorAssignment, AccessError> {
        self.resolver
            .resolve_scope(&command.sector_id, command.street_id.as_deref())
            .await?;
        self.resolver.active_operator(&command.operator_id).await?;

        let assignment = OperatorAssignment::new(
            Uuid::now_v7().to_string(),
            command.operator_id,
            command.sector_id,
            command.street_id,
            command.valid_from,
            command.valid_to,
        )?;
        self.assignments.save(assignment.clone()).await?;
        tracing::info!(assignment_id = %assignment.assignment_id, "assignment granted");
        Ok(assignment)
    }

    #[tracing::instrument(skip(self))]
    pub async fn revoke(&self, command: RevokeAssignment) -> Result<OperatorAssignment, AccessError> {
        let mut assignment = self
            .assignments
            .get(&command.assignment_id)
            .await?
            .ok_or_else(|| AccessError::AssignmentNotFound(command.assignment_id.clone()))?;
        let at = command.at.unwrap_or_else(|| self.clock.now());
        assignment.revoke(at)?;
        self.assignments.save(assignment.clone()).await?;
        tracing::info!(valid_to = ?assignment.valid_to, "assignment revoked");
        Ok(assignment)
    }
}
