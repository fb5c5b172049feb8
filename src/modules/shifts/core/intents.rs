use crate::modules::shifts::core::events::v1::shift_opened::ShiftOpenedV1;
use crate::modules::shifts::core::reconciliation::ReconciliationReport;

/// Domain intents produced by the deciders as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone)]
pub enum ShiftIntent {
    PublishShiftOpened { payload: ShiftOpenedV1 },
    PublishShiftClosed { report: ReconciliationReport },
}
