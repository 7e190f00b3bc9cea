/// Application state and router builder
///
/// This module defines the shared application state and builds the Axum
/// router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use finboard_api::{app::AppState, config::Config};
/// use finboard_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.database.clone()).await?;
/// let state = AppState::new(pool, config);
/// let app = finboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```
use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                            # Health check (public)
/// └── /v1/                               # API v1 (versioned)
///     ├── /auth/
///     │   └── POST /login
///     ├── /dashboard/
///     │   ├── GET /revenue
///     │   ├── GET /latest-invoices
///     │   └── GET /cards
///     ├── /invoices/
///     │   ├── GET    /                   # Filtered, paginated listing
///     │   ├── GET    /pages              # Page count for the filter
///     │   ├── GET    /:id
///     │   ├── POST   /
///     │   ├── PUT    /:id
///     │   └── DELETE /:id
///     └── /customers/
///         ├── GET /                      # id+name pairs for selects
///         └── GET /filtered              # With invoice totals
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let auth_routes = Router::new().route("/login", post(routes::auth::login));

    let dashboard_routes = Router::new()
        .route("/revenue", get(routes::dashboard::revenue))
        .route("/latest-invoices", get(routes::dashboard::latest_invoices))
        .route("/cards", get(routes::dashboard::cards));

    let invoice_routes = Router::new()
        .route("/", get(routes::invoices::list_invoices))
        .route("/", post(routes::invoices::create_invoice))
        .route("/pages", get(routes::invoices::invoice_pages))
        .route("/:id", get(routes::invoices::get_invoice))
        .route("/:id", put(routes::invoices::update_invoice))
        .route("/:id", delete(routes::invoices::delete_invoice));

    let customer_routes = Router::new()
        .route("/", get(routes::customers::list_customers))
        .route("/filtered", get(routes::customers::filtered_customers));

    let v1_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/dashboard", dashboard_routes)
        .nest("/invoices", invoice_routes)
        .nest("/customers", customer_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
