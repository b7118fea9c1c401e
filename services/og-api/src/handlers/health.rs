//! Health checks, metrics, and monitoring endpoints.

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::warn;

use crate::state::AppState;

// ============================================================================
// Health Checks
// ============================================================================

/// GET /health - Basic health check
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /ready - Readiness check (every catalog asset is readable)
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    match state.loader.missing_assets().await {
        Ok(missing) if missing.is_empty() => (StatusCode::OK, "Ready"),
        Ok(missing) => {
            warn!(missing = ?missing, "Not ready: preview assets missing");
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready")
        }
        Err(e) => {
            warn!(error = %e, "Not ready: asset storage unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready")
        }
    }
}

// ============================================================================
// Prometheus Metrics
// ============================================================================

/// GET /metrics - Prometheus metrics endpoint
pub async fn metrics_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(prometheus): Extension<PrometheusHandle>,
) -> Response {
    let mut output = prometheus.render();

    if let Some(cache) = state.loader.cache() {
        let stats = cache.stats();
        output.push_str(&format!(
            "# HELP og_asset_cache_hits Total asset cache hits\n# TYPE og_asset_cache_hits counter\nog_asset_cache_hits {}\n",
            stats.hits.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "# HELP og_asset_cache_misses Total asset cache misses\n# TYPE og_asset_cache_misses counter\nog_asset_cache_misses {}\n",
            stats.misses.load(Ordering::Relaxed)
        ));
        output.push_str(&format!(
            "# HELP og_asset_cache_bytes Asset bytes held in memory\n# TYPE og_asset_cache_bytes gauge\nog_asset_cache_bytes {}\n",
            stats.size_bytes.load(Ordering::Relaxed)
        ));
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        output,
    )
        .into_response()
}

// ============================================================================
// JSON Metrics API
// ============================================================================

/// GET /api/metrics - Application metrics as JSON
pub async fn api_metrics_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<serde_json::Value> {
    let snapshot = state.metrics.snapshot().await;

    let cache = state.loader.cache().map(|cache| {
        let stats = cache.stats();
        serde_json::json!({
            "hits": stats.hits.load(Ordering::Relaxed),
            "misses": stats.misses.load(Ordering::Relaxed),
            "hit_rate": stats.hit_rate(),
            "entries": stats.entry_count.load(Ordering::Relaxed),
            "size_bytes": stats.size_bytes.load(Ordering::Relaxed),
        })
    });

    Json(serde_json::json!({
        "metrics": snapshot,
        "asset_store": state.loader.storage().label(),
        "asset_cache": cache,
    }))
}
