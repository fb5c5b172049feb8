use crate::modules::access::core::model::{Operator, Sector, Street};
use async_trait::async_trait;

/// Read access to the tenant/identity collaborator.
#[async_trait]
pub trait Directory: Send + Sync {
    async fn get_operator(&self, operator_id: &str) -> anyhow::Result<Option<Operator>>;
    async fn get_sector(&self, sector_id: &str) -> anyhow::Result<Option<Sector>>;
    async fn get_street(&self, street_id: &str) -> anyhow::Result<Option<Street>>;
}
