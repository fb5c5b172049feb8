use anyhow::Context;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use parking_ops::modules::access::adapters::outbound::in_memory::{
    InMemoryAssignmentStore, InMemoryDirectory,
};
use parking_ops::modules::access::adapters::outbound::seed::{DirectorySeed, apply_seed};
use parking_ops::modules::access::use_cases::check_access::handler::AuthorizationResolver;
use parking_ops::modules::access::use_cases::manage_assignments::handler::AssignmentManager;
use parking_ops::modules::shifts::adapters::outbound::active_shifts::InMemoryActiveShifts;
use parking_ops::modules::shifts::core::events::ShiftEvent;
use parking_ops::shared::core::primitives::SystemClock;
use parking_ops::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use parking_ops::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use parking_ops::shell::config::AppConfig;
use parking_ops::shell::graphql::{AppSchema, build_schema};
use parking_ops::shell::http::router;
use parking_ops::shell::state::{AppState, Lifecycle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let clock = Arc::new(SystemClock);
    let directory = Arc::new(InMemoryDirectory::new());
    let assignments = Arc::new(InMemoryAssignmentStore::new());
    if let Some(path) = &config.directory_seed {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading directory seed {}", path.display()))?;
        apply_seed(DirectorySeed::from_json(&raw)?, &directory, &*assignments).await?;
    }

    let resolver = Arc::new(AuthorizationResolver::new(
        directory,
        assignments.clone(),
        clock.clone(),
    ));
    let manager = Arc::new(AssignmentManager::new(
        resolver.clone(),
        assignments,
        clock.clone(),
    ));
    let lifecycle = Arc::new(
        Lifecycle::new(
            config.outbox_topic.clone(),
            Arc::new(InMemoryEventStore::<ShiftEvent>::new()),
            Arc::new(InMemoryDomainOutbox::new()),
            Arc::new(InMemoryActiveShifts::new()),
            resolver.clone(),
            clock,
        )
        .with_max_append_attempts(config.max_append_attempts),
    );

    let state = AppState {
        resolver,
        assignments: manager,
        lifecycle,
    };
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http());

    tracing::info!(addr = %config.addr, topic = %config.outbox_topic, "parking ops listening");
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
