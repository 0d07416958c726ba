use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{
    errors::StartupError,
    routes::{self, Frontend},
    state::{ServerAuthConfig, ServerState},
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, migrate, build the router and serve until the listener fails.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let has_index = common::env::ensure_env(&cfg.frontend.dir).await?;

    let db = models::db::connect(&cfg.database).await?;
    models::db::migrate(&db)
        .await
        .map_err(|e| StartupError::Runtime(format!("migrations failed: {e}")))?;
    info!("database migrated");

    if cfg.auth.api_secret_key.is_none() {
        warn!("API_SECRET_KEY not set; every write request will be refused");
    }
    let state = ServerState::new(
        db,
        ServerAuthConfig { api_secret_key: cfg.auth.api_secret_key.clone() },
    );

    let frontend = Frontend { dir: cfg.frontend.dir.clone(), spa_fallback: has_index };
    let app: Router = routes::build_router(state, build_cors(), Some(frontend));

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
