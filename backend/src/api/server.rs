use axum::{routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::search;
use crate::api::views::Views;
use crate::config::Config;
use crate::db::{self, repo};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub views: Views,
}

impl AppState {
    /// Connects to the database, creates the schema and seeds it unless told not to.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let pool = db::connect(&config.database_url, config.max_connections).await?;
        repo::create_tables(&pool).await?;

        if config.no_seed {
            info!("Skipping demo data");
        } else {
            repo::seed_demo_data(&pool).await?;
        }

        Ok(Self {
            db: pool,
            views: Views::new()?,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(search::index))
        .route(
            "/search/vulnerable",
            get(search::vulnerable_form).post(search::search_users_vulnerable),
        )
        .route(
            "/search/protected",
            get(search::protected_form).post(search::search_users_protected),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(config).await?);
    let app = router(state);

    let listener = TcpListener::bind(config.bind).await?;
    info!("Server running on http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
