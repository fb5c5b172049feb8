use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};

use crate::modules::access::core::errors::AccessError;
use crate::modules::access::use_cases::check_access::inbound::graphql::CheckAccessQuery;
use crate::modules::shifts::use_cases::close_shift::inbound::graphql::CloseShiftMutation;
use crate::modules::shifts::use_cases::lifecycle::ApplicationError;
use crate::modules::shifts::use_cases::open_shift::inbound::graphql::OpenShiftMutation;
use crate::modules::shifts::use_cases::post_movement::inbound::graphql::PostMovementMutation;
use crate::modules::shifts::use_cases::preview_reconciliation::inbound::graphql::ReconciliationQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(CheckAccessQuery, ReconciliationQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(OpenShiftMutation, PostMovementMutation, CloseShiftMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Errors carry the same machine-readable code as the HTTP surface under
/// `extensions.code`.
pub fn application_error(err: ApplicationError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

pub fn access_error(err: AccessError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}
