// Climate Analysis API v0.1
use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod db;
mod errors;
mod routes;
mod services;
#[cfg(test)]
mod test_support;

use config::AppConfig;
use services::climate::ClimateService;
use services::reference::ReferenceData;

/// Maximum number of connections in the database pool.
const DB_POOL_MAX_CONNECTIONS: u32 = 5;
/// Minimum number of connections kept alive in the database pool.
const DB_POOL_MIN_CONNECTIONS: u32 = 2;

/// Climate Analysis API — OpenAPI specification.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Climate Analysis API",
        version = "0.1.0",
        description = "Read-only climate observation API. Serves trailing-12-month \
            precipitation series, station listings, temperature observations for the \
            most-active station, and min/avg/max temperature statistics over arbitrary \
            date ranges, all derived from a fixed SQLite observation file.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Home", description = "Route listing"),
        (name = "Climate", description = "Precipitation and temperature summaries"),
        (name = "Health", description = "Service health check"),
    ),
    paths(
        routes::home::home,
        routes::climate::precipitation,
        routes::climate::stations,
        routes::climate::tobs,
        routes::climate::temp_stats_from,
        routes::climate::temp_stats_range,
        routes::health::health_check,
    ),
    components(
        schemas(
            services::climate::TempStats,
            routes::health::HealthResponse,
            errors::ErrorResponse,
        )
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "climate_analysis_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    // Set up database connection pool over the read-only observation file
    let pool = SqlitePoolOptions::new()
        .max_connections(DB_POOL_MAX_CONNECTIONS)
        .min_connections(DB_POOL_MIN_CONNECTIONS)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to observation database");

    // Compute reference data once, before any request is served. The cache
    // is read-only for the process lifetime; with no write path the store
    // cannot change under it.
    let reference = match ReferenceData::load(&pool).await {
        Ok(reference) => Arc::new(reference),
        Err(e) => {
            tracing::error!("Failed to compute startup reference data: {}", e);
            std::process::exit(1);
        }
    };

    let service = ClimateService::new(pool.clone(), reference);

    // CORS — read-only API, restrict methods to GET
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    // Build router
    // Climate routes use ClimateService state; health uses the pool directly.
    // The static /api/v1.0 segments take precedence over the :start capture.
    let climate_routes = Router::new()
        .route("/api/v1.0/precipitation", get(routes::climate::precipitation))
        .route("/api/v1.0/stations", get(routes::climate::stations))
        .route("/api/v1.0/tobs", get(routes::climate::tobs))
        .route("/api/v1.0/:start", get(routes::climate::temp_stats_from))
        .route(
            "/api/v1.0/:start/:end",
            get(routes::climate::temp_stats_range),
        )
        .with_state(service);

    let health_routes = Router::new()
        .route("/api/v1.0/health", get(routes::health::health_check))
        .with_state(pool);

    let app = Router::new()
        .route("/", get(routes::home::home))
        .merge(climate_routes)
        .merge(health_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("API server listening on {}", addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui/",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
