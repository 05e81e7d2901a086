//! Service entry point.
//!
//! Loads configuration from the environment, wires the in-memory store
//! and static identity provider behind their ports, and serves the API
//! until a shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mea_maturity::adapters::http::{api_router, AssessmentHandlers};
use mea_maturity::adapters::identity::StaticTokenIdentity;
use mea_maturity::adapters::store::InMemoryAssessmentStore;
use mea_maturity::application::handlers::assessment::{
    GetAssessmentHandler, GetReportHandler, ListAssessmentsHandler, SubmitAssessmentHandler,
    WatchAssessmentsHandler,
};
use mea_maturity::config::AppConfig;
use mea_maturity::domain::catalog::reference_catalog;
use mea_maturity::ports::{AssessmentRepository, IdentityProvider};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level)?;

    let catalog = reference_catalog();
    let repository: Arc<dyn AssessmentRepository> =
        Arc::new(InMemoryAssessmentStore::new(catalog));
    let identity: Arc<dyn IdentityProvider> = Arc::new(StaticTokenIdentity::new());

    let handlers = AssessmentHandlers::new(
        Arc::new(SubmitAssessmentHandler::new(repository.clone(), catalog)),
        Arc::new(ListAssessmentsHandler::new(repository.clone())),
        Arc::new(GetAssessmentHandler::new(repository.clone())),
        Arc::new(GetReportHandler::new(repository.clone())),
        Arc::new(WatchAssessmentsHandler::new(repository)),
    );

    let app = api_router(handlers, identity, config.store.namespace.clone())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        %addr,
        namespace = %config.store.namespace,
        environment = ?config.server.environment,
        "maturity assessment service ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()?;
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install shutdown signal handler");
        return;
    }
    info!("shutdown signal received, draining connections");
}
