//! Persona Insight server binary.

use std::error::Error;
use std::sync::Arc;

use http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use persona_insight::adapters::catalog::YamlCatalogLoader;
use persona_insight::adapters::http::{api_router, ReportAppState};
use persona_insight::adapters::memory::{InMemoryAnswerStore, InMemoryReportRepository};
use persona_insight::adapters::postgres::{PostgresAnswerReader, PostgresReportRepository};
use persona_insight::config::{AppConfig, DatabaseConfig, ServerConfig};
use persona_insight::domain::assessment::AssessmentEngine;
use persona_insight::ports::{AnswerReader, ReportRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let catalog = YamlCatalogLoader::load_or_embedded(config.catalog.path()).await?;
    let engine = Arc::new(AssessmentEngine::new(
        Arc::new(catalog),
        config.scoring.scoring_rules(),
        config.scoring.synthesis_rules(),
    ));

    let (answer_reader, report_repository) = match &config.database {
        Some(database) => postgres_stores(database).await?,
        None => {
            tracing::warn!("No database configured, using in-memory stores");
            memory_stores()
        }
    };

    let state = ReportAppState {
        answer_reader,
        report_repository,
        engine,
    };

    let app = api_router(state)
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// RUST_LOG overrides the configured log level. Production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_level.clone()));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

type Stores = (Arc<dyn AnswerReader>, Arc<dyn ReportRepository>);

async fn postgres_stores(database: &DatabaseConfig) -> Result<Stores, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .connect(&database.url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            e
        })?;
    tracing::info!("Database connection established");

    Ok((
        Arc::new(PostgresAnswerReader::new(pool.clone())),
        Arc::new(PostgresReportRepository::new(pool)),
    ))
}

fn memory_stores() -> Stores {
    (
        Arc::new(InMemoryAnswerStore::new()),
        Arc::new(InMemoryReportRepository::new()),
    )
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods([Method::GET]);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
