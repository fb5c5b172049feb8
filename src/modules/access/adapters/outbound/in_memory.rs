use crate::modules::access::adapters::outbound::assignment_store::AssignmentStore;
use crate::modules::access::adapters::outbound::directory::Directory;
use crate::modules::access::core::model::{Operator, OperatorAssignment, Sector, Street};
use anyhow::bail;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDirectory {
    operators: RwLock<HashMap<String, Operator>>,
    sectors: RwLock<HashMap<String, Sector>>,
    streets: RwLock<HashMap<String, Street>>,
    offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operators
            .get_mut()
            .insert(operator.operator_id.clone(), operator);
        self
    }

    pub fn with_sector(mut self, sector: Sector) -> Self {
        self.sectors
            .get_mut()
            .insert(sector.sector_id.clone(), sector);
        self
    }

    pub fn with_street(mut self, street: Street) -> Self {
        self.streets
            .get_mut()
            .insert(street.street_id.clone(), street);
        self
    }

    pub async fn upsert_operator(&self, operator: Operator) {
        self.operators
            .write()
            .await
            .insert(operator.operator_id.clone(), operator);
    }

    pub async fn upsert_sector(&self, sector: Sector) {
        self.sectors
            .write()
            .await
            .insert(sector.sector_id.clone(), sector);
    }

    pub async fn upsert_street(&self, street: Street) {
        self.streets
            .write()
            .await
            .insert(street.street_id.clone(), street);
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.offline {
            bail!("Directory offline");
        }
        Ok(())
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn get_operator(&self, operator_id: &str) -> anyhow::Result<Option<Operator>> {
        self.ensure_online()?;
        Ok(self.operators.read().await.get(operator_id).cloned())
    }

    async fn get_sector(&self, sector_id: &str) -> anyhow::Result<Option<Sector>> {
        self.ensure_online()?;
        Ok(self.sectors.read().await.get(sector_id).cloned())
    }

    async fn get_street(&self, street_id: &str) -> anyhow::Result<Option<Street>> {
        self.ensure_online()?;
        Ok(self.streets.read().await.get(street_id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryAssignmentStore {
    rows: RwLock<HashMap<(String, String), Vec<OperatorAssignment>>>,
    offline: bool,
}

impl InMemoryAssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assignment(mut self, assignment: OperatorAssignment) -> Self {
        let key = (assignment.operator_id.clone(), assignment.sector_id.clone());
        self.rows.get_mut().entry(key).or_default().push(assignment);
        self
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.offline {
            bail!("Assignment store offline");
        }
        Ok(())
    }
}

#[async_trait]
impl AssignmentStore for InMemoryAssignmentStore {
    async fn list_for(
        &self,
        operator_id: &str,
        sector_id: &str,
    ) -> anyhow::Result<Vec<OperatorAssignment>> {
        self.ensure_online()?;
        let key = (operator_id.to_string(), sector_id.to_string());
        Ok(self.rows.read().await.get(&key).cloned().unwrap_or_default())
    }

    async fn get(&self, assignment_id: &str) -> anyhow::Result<Option<OperatorAssignment>> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .flatten()
            .find(|a| a.assignment_id == assignment_id)
            .cloned())
    }

    async fn save(&self, assignment: OperatorAssignment) -> anyhow::Result<()> {
        self.ensure_online()?;
        let key = (assignment.operator_id.clone(), assignment.sector_id.clone());
        let mut rows = self.rows.write().await;
        let bucket = rows.entry(key).or_default();
        match bucket
            .iter_mut()
            .find(|a| a.assignment_id == assignment.assignment_id)
        {
            Some(existing) => *existing = assignment,
            None => bucket.push(assignment),
        }
        Ok(())
    }
}
