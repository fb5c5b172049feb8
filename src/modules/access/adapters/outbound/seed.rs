use crate::modules::access::adapters::outbound::assignment_store::AssignmentStore;
use crate::modules::access::adapters::outbound::in_memory::InMemoryDirectory;
use crate::modules::access::core::model::{Operator, OperatorAssignment, Sector, Street};
use anyhow::Context;
use serde::Deserialize;

/// Initial directory contents for a deployment backed by the in-memory
/// adapters.
#[derive(Debug, Default, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub sectors: Vec<Sector>,
    #[serde(default)]
    pub streets: Vec<Street>,
    #[serde(default)]
    pub assignments: Vec<OperatorAssignment>,
}

impl DirectorySeed {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("directory seed is not valid JSON")
    }
}

pub async fn apply_seed(
    seed: DirectorySeed,
    directory: &InMemoryDirectory,
    assignments: &dyn AssignmentStore,
) -> anyhow::Result<()> {
    let counts = (
        seed.operators.len(),
        seed.sectors.len(),
        seed.streets.len(),
        seed.assignments.len(),
    );
    for operator in seed.operators {
        directory.upsert_operator(operator).await;
    }
    for sector in seed.sectors {
        directory.upsert_sector(sector).await;
    }
    for street in seed.streets {
        directory.upsert_street(street).await;
    }
    for assignment in seed.assignments {
        assignment
            .validate_window()
            .with_context(|| format!("assignment {}", assignment.assignment_id))?;
        assignments.save(assignment).await?;
    }
    tracing::info!(
        operators = counts.0,
        sectors = counts.1,
        streets = counts.2,
        assignments = counts.3,
        "directory seed applied"
    );
    Ok(())
}
