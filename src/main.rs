use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use case_routing::shell::config::Config;
use case_routing::shell::http::router;
use case_routing::shell::state::{AppState, InMemoryStores};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // In-memory stores for now
    let stores = InMemoryStores::new(&config.attachment_bucket);
    let state = AppState::wire(&stores, config.workflow_settings());

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);
    let app = router(state).layer(cors).layer(TraceLayer::new_for_http());

    tracing::info!(
        bind = %config.bind,
        policy = ?config.transition_policy,
        "case routing listening; GraphQL at /gql"
    );
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
