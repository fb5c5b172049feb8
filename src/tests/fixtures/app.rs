// Fully wired in-memory application for handler and end-to-end tests.
// The clock is pinned at 2024-06-01T00:00:00Z and no assignments exist
// unless added with `with_grant`.

use crate::modules::access::adapters::outbound::in_memory::{
    InMemoryAssignmentStore, InMemoryDirectory,
};
use crate::modules::access::core::model::OperatorAssignment;
use crate::modules::access::use_cases::check_access::handler::AuthorizationResolver;
use crate::modules::access::use_cases::manage_assignments::handler::AssignmentManager;
use crate::modules::shifts::adapters::outbound::active_shifts::InMemoryActiveShifts;
use crate::modules::shifts::core::events::ShiftEvent;
use crate::shared::core::primitives::{FixedClock, Timestamp};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::state::{AppState, Lifecycle};
use crate::tests::fixtures::directory::{at, seeded_directory};
use std::sync::Arc;

pub const TEST_TOPIC: &str = "parking-ops.shifts.test";

pub struct TestApp {
    pub clock: Arc<FixedClock>,
    pub directory: Arc<InMemoryDirectory>,
    pub assignments: Arc<InMemoryAssignmentStore>,
    pub event_store: Arc<InMemoryEventStore<ShiftEvent>>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub active_shifts: Arc<InMemoryActiveShifts>,
    pub resolver: Arc<AuthorizationResolver>,
    pub manager: Arc<AssignmentManager>,
    pub lifecycle: Arc<Lifecycle>,
    grants: Vec<OperatorAssignment>,
    offline_event_store: bool,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(Vec::new(), false)
    }

    pub fn with_offline_event_store() -> Self {
        Self::build(Vec::new(), true)
    }

    /// Rebuilds the app with one more assignment; call before use.
    pub fn with_grant(
        self,
        operator_id: &str,
        sector_id: &str,
        street_id: Option<&str>,
        valid_from: Timestamp,
        valid_to: Option<Timestamp>,
    ) -> Self {
        let mut grants = self.grants;
        grants.push(OperatorAssignment {
            assignment_id: format!("as-{}", grants.len() + 1),
            operator_id: operator_id.to_string(),
            sector_id: sector_id.to_string(),
            street_id: street_id.map(str::to_string),
            valid_from,
            valid_to,
        });
        Self::build(grants, self.offline_event_store)
    }

    fn build(grants: Vec<OperatorAssignment>, offline_event_store: bool) -> Self {
        let clock = Arc::new(FixedClock::new(at(2024, 6, 1)));
        let directory = Arc::new(seeded_directory());
        let assignments = Arc::new(
            grants
                .iter()
                .cloned()
                .fold(InMemoryAssignmentStore::new(), |store, grant| {
                    store.with_assignment(grant)
                }),
        );
        let mut event_store = InMemoryEventStore::<ShiftEvent>::new();
        if offline_event_store {
            event_store.toggle_offline();
        }
        let event_store = Arc::new(event_store);
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let active_shifts = Arc::new(InMemoryActiveShifts::new());
        let resolver = Arc::new(AuthorizationResolver::new(
            directory.clone(),
            assignments.clone(),
            clock.clone(),
        ));
        let manager = Arc::new(AssignmentManager::new(
            resolver.clone(),
            assignments.clone(),
            clock.clone(),
        ));
        let lifecycle = Arc::new(Lifecycle::new(
            TEST_TOPIC,
            event_store.clone(),
            outbox.clone(),
            active_shifts.clone(),
            resolver.clone(),
            clock.clone(),
        ));
        Self {
            clock,
            directory,
            assignments,
            event_store,
            outbox,
            active_shifts,
            resolver,
            manager,
            lifecycle,
            grants,
            offline_event_store,
        }
    }

    /// A second lifecycle over the same stores with a different retry budget.
    pub fn lifecycle_with_attempts(&self, attempts: u32) -> Arc<Lifecycle> {
        Arc::new(
            Lifecycle::new(
                TEST_TOPIC,
                self.event_store.clone(),
                self.outbox.clone(),
                self.active_shifts.clone(),
                self.resolver.clone(),
                self.clock.clone(),
            )
            .with_max_append_attempts(attempts),
        )
    }

    pub fn state(&self) -> AppState {
        AppState {
            resolver: self.resolver.clone(),
            assignments: self.manager.clone(),
            lifecycle: self.lifecycle.clone(),
        }
    }
}
