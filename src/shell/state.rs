use crate::modules::access::use_cases::check_access::handler::AuthorizationResolver;
use crate::modules::access::use_cases::manage_assignments::handler::AssignmentManager;
use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::use_cases::lifecycle::ShiftLifecycle;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

pub type Lifecycle = ShiftLifecycle<InMemoryEventStore<ShiftEvent>, InMemoryDomainOutbox>;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<AuthorizationResolver>,
    pub assignments: Arc<AssignmentManager>,
    pub lifecycle: Arc<Lifecycle>,
}
