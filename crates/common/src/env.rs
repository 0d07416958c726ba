//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use tracing::{info, warn};

/// Warn when the frontend bundle is missing; the API still works without it.
/// Returns whether `<frontend_dir>/index.html` exists.
pub async fn ensure_env(frontend_dir: &str) -> anyhow::Result<bool> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; static assets will 404");
        return Ok(false);
    }
    let index = std::path::Path::new(frontend_dir).join("index.html");
    let has_index = tokio::fs::metadata(&index).await.is_ok();
    if !has_index {
        warn!(index = %index.display(), "frontend index.html missing; SPA fallback disabled");
    } else {
        info!(%frontend_dir, "serving frontend bundle");
    }
    Ok(has_index)
}
