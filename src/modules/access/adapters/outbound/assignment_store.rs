use crate::modules::access::core::model::OperatorAssignment;
use async_trait::async_trait;

/// Storage for operator assignments, keyed by (operator, sector). No rules
/// live here.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    async fn list_for(
        &self,
        operator_id: &str,
        sector_id: &str,
    ) -> anyhow::Result<Vec<OperatorAssignment>>;

    async fn get(&self, assignment_id: &str) -> anyhow::Result<Option<OperatorAssignment>>;

    /// Inserts or replaces by `assignment_id`.
    async fn save(&self, assignment: OperatorAssignment) -> anyhow::Result<()>;
}
