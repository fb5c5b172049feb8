// Canonical directory used across tests.
//
// Operators: op-ana, op-ben (active), op-carl (inactive)
// Sectors:   sec-center, sec-harbor (public), sec-mall (private)
// Streets:   st-main, st-oak (sec-center), st-pier (sec-harbor)

use crate::modules::access::adapters::outbound::in_memory::InMemoryDirectory;
use crate::modules::access::core::model::{
    Operator, OperatorAssignment, OperatorStatus, Sector, Street,
};
use crate::shared::core::primitives::Timestamp;
use chrono::{TimeZone, Utc};

pub fn at(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn assignment(
    assignment_id: &str,
    operator_id: &str,
    sector_id: &str,
    street_id: Option<&str>,
    valid_from: Timestamp,
    valid_to: Option<Timestamp>,
) -> OperatorAssignment {
    OperatorAssignment {
        assignment_id: assignment_id.to_string(),
        operator_id: operator_id.to_string(),
        sector_id: sector_id.to_string(),
        street_id: street_id.map(str::to_string),
        valid_from,
        valid_to,
    }
}

fn operator(operator_id: &str, name: &str, status: OperatorStatus) -> Operator {
    Operator {
        operator_id: operator_id.to_string(),
        name: name.to_string(),
        status,
    }
}

fn sector(sector_id: &str, name: &str, is_private: bool) -> Sector {
    Sector {
        sector_id: sector_id.to_string(),
        name: name.to_string(),
        is_private,
    }
}

fn street(street_id: &str, sector_id: &str, name: &str) -> Street {
    Street {
        street_id: street_id.to_string(),
        sector_id: sector_id.to_string(),
        name: name.to_string(),
    }
}

pub fn seeded_directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
        .with_operator(operator("op-ana", "Ana", OperatorStatus::Active))
        .with_operator(operator("op-ben", "Ben", OperatorStatus::Active))
        .with_operator(operator("op-carl", "Carl", OperatorStatus::Inactive))
        .with_sector(sector("sec-center", "City Center", false))
        .with_sector(sector("sec-harbor", "Harbor", false))
        .with_sector(sector("sec-mall", "Mall Garage", true))
        .with_street(street("st-main", "sec-center", "Main Street"))
        .with_street(street("st-oak", "sec-center", "Oak Avenue"))
        .with_street(street("st-pier", "sec-harbor", "Pier Road"))
}
