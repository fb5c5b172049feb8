use crate::modules::access::core::model::OperatorAssignment;
use crate::shared::core::primitives::Timestamp;

/// True iff at least one assignment covers the requested scope and is valid
/// at `at`. The assignments are treated as a union of intervals.
pub fn grants_access(
    assignments: &[OperatorAssignment],
    sector_id: &str,
    street_id: Option<&str>,
    at: Timestamp,
) -> bool {
    assignments
        .iter()
        .any(|assignment| assignment.covers(sector_id, street_id) && assignment.is_valid_at(at))
}
