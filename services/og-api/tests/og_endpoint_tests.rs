//! End-to-end tests of the HTTP surface, driven through the router with
//! `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::extract::Query;
use axum::http::Uri;
use axum::http::{header, Request, StatusCode};
use bytes::Bytes;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;
use tower::ServiceExt;

use og_api::handlers::{generate_preview, CACHE_CONTROL, FAILURE_BODY};
use og_api::AppState;
use og_common::{BackgroundVariant, PreviewParams, RenderRequest, DEFAULT_DESCRIPTION};
use storage::{AssetCache, AssetCatalog, AssetLoader, AssetStorage};
use test_utils::{fixture_logo_svg, fixture_photo_jpeg, require_test_fonts, FontFixtures};

// ============================================================================
// Helper functions
// ============================================================================

fn prometheus_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

async fn seed_assets(storage: &AssetStorage, fonts: &FontFixtures) {
    let catalog = AssetCatalog::default();
    storage
        .put(&catalog.bold_font, Bytes::from(fonts.bold.clone()))
        .await
        .unwrap();
    storage
        .put(&catalog.regular_font, Bytes::from(fonts.regular.clone()))
        .await
        .unwrap();
    storage
        .put(&catalog.logo, Bytes::from(fixture_logo_svg()))
        .await
        .unwrap();
    for (i, key) in catalog.backgrounds.iter().enumerate() {
        let shade = 60 * (i as u8 + 1);
        storage
            .put(key, Bytes::from(fixture_photo_jpeg(404, 701, [shade, 90, 140])))
            .await
            .unwrap();
    }
}

fn state_for(storage: AssetStorage) -> Arc<AppState> {
    let loader = AssetLoader::new(storage, AssetCatalog::default()).with_cache(AssetCache::new());
    Arc::new(AppState::from_loader(loader))
}

async fn get(state: Arc<AppState>, uri: &str) -> (StatusCode, axum::http::HeaderMap, Bytes) {
    let app = og_api::app(state, prometheus_handle());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body)
}

// ============================================================================
// Failure path
// ============================================================================

#[tokio::test]
async fn test_missing_assets_yield_fixed_500() {
    let state = state_for(AssetStorage::in_memory());

    let (status, headers, body) = get(state.clone(), "/api/og?title=Hello").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(&body[..], FAILURE_BODY.as_bytes());
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert!(headers.get(header::CACHE_CONTROL).is_none());

    let snapshot = state.metrics.snapshot().await;
    assert_eq!(snapshot.requests, 1);
    assert_eq!(snapshot.render_errors, 1);
    assert_eq!(snapshot.renders, 0);
    // The photo choice is counted even when generation fails
    assert_eq!(snapshot.backgrounds.iter().sum::<u64>(), 1);
}

#[tokio::test]
async fn test_corrupt_photo_yields_fixed_500() {
    let fonts = require_test_fonts!();
    let storage = AssetStorage::in_memory();
    seed_assets(&storage, &fonts).await;
    for key in &AssetCatalog::default().backgrounds {
        storage
            .put(key, Bytes::from_static(b"not a jpeg"))
            .await
            .unwrap();
    }

    let (status, _, body) = get(state_for(storage), "/api/og").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(&body[..], FAILURE_BODY.as_bytes());
}

// ============================================================================
// Success path
// ============================================================================

#[tokio::test]
async fn test_default_request_returns_cacheable_png() {
    let fonts = require_test_fonts!();
    let storage = AssetStorage::in_memory();
    seed_assets(&storage, &fonts).await;
    let state = state_for(storage);

    let (status, headers, body) = get(state.clone(), "/api/og").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
    assert_eq!(headers[header::CACHE_CONTROL], CACHE_CONTROL);

    let image = image::load_from_memory(&body).unwrap();
    assert_eq!((image.width(), image.height()), (1200, 630));

    let snapshot = state.metrics.snapshot().await;
    assert_eq!(snapshot.renders, 1);
    assert_eq!(snapshot.backgrounds.iter().sum::<u64>(), 1);
}

#[tokio::test]
async fn test_duplicate_keys_are_accepted() {
    let fonts = require_test_fonts!();
    let storage = AssetStorage::in_memory();
    seed_assets(&storage, &fonts).await;

    let (status, headers, _) = get(
        state_for(storage),
        "/api/og?title=First&title=Second&description=&utm_source=feed",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
}

#[tokio::test]
async fn test_generated_card_carries_requested_text() {
    let fonts = require_test_fonts!();
    let storage = AssetStorage::in_memory();
    seed_assets(&storage, &fonts).await;
    let state = state_for(storage);

    for variant in BackgroundVariant::ALL {
        let request = RenderRequest::new(Some("Hello"), None);
        let rendered = generate_preview(&state, request, variant).await.unwrap();

        assert_eq!((rendered.width, rendered.height), (1200, 630));
        assert_eq!(rendered.layout.title.text(), "Hello");
        assert_eq!(rendered.layout.description.text(), DEFAULT_DESCRIPTION);
    }
}

#[tokio::test]
async fn test_long_encoded_title_is_truncated() {
    let fonts = require_test_fonts!();
    let storage = AssetStorage::in_memory();
    seed_assets(&storage, &fonts).await;
    let state = state_for(storage);

    // 500 characters: "word word word ..."
    let uri: Uri = format!("/api/og?title={}&description=World", "word%20".repeat(100))
        .parse()
        .unwrap();

    let (status, _, body) = get(state.clone(), &uri.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let image = image::load_from_memory(&body).unwrap();
    assert_eq!((image.width(), image.height()), (1200, 630));

    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri).unwrap();
    let request = RenderRequest::from(PreviewParams::from_pairs(pairs));
    assert_eq!(request.title.chars().count(), 100);

    let rendered = generate_preview(&state, request, BackgroundVariant::First)
        .await
        .unwrap();
    assert_eq!(rendered.layout.title.text(), vec!["word"; 20].join(" "));
    assert_eq!(rendered.layout.description.text(), "World");
}

#[tokio::test]
async fn test_unusual_query_strings_still_render() {
    let fonts = require_test_fonts!();
    let storage = AssetStorage::in_memory();
    seed_assets(&storage, &fonts).await;
    let state = state_for(storage);

    let emoji = "%F0%9F%98%80".repeat(150);
    let uris = [
        "/api/og?title".to_string(),
        "/api/og?title=%FF%FE".to_string(),
        format!("/api/og?title={}", emoji),
        "/api/og?=&&&".to_string(),
    ];

    for uri in &uris {
        let (status, headers, body) = get(state.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(headers[header::CONTENT_TYPE], "image/png");
        let image = image::load_from_memory(&body).unwrap();
        assert_eq!((image.width(), image.height()), (1200, 630));
    }
}

#[tokio::test]
async fn test_missing_single_photo_fails_only_that_variant() {
    let fonts = require_test_fonts!();
    let storage = AssetStorage::in_memory();
    seed_assets(&storage, &fonts).await;

    // Rebuild storage without the second photo
    let partial = AssetStorage::in_memory();
    let catalog = AssetCatalog::default();
    for key in catalog.all_keys() {
        if key != catalog.background(BackgroundVariant::Second) {
            partial.put(key, storage.get(key).await.unwrap()).await.unwrap();
        }
    }
    let state = state_for(partial);

    assert!(generate_preview(&state, RenderRequest::default(), BackgroundVariant::First)
        .await
        .is_ok());
    assert!(generate_preview(&state, RenderRequest::default(), BackgroundVariant::Second)
        .await
        .is_err());
}

// ============================================================================
// Health and metrics
// ============================================================================

#[tokio::test]
async fn test_health_is_always_ok() {
    let (status, _, body) = get(state_for(AssetStorage::in_memory()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_ready_reflects_asset_presence() {
    let storage = AssetStorage::in_memory();
    let (status, _, body) = get(state_for(storage.clone()), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(&body[..], b"Not ready");

    let fonts = FontFixtures {
        bold: b"bold".to_vec(),
        regular: b"regular".to_vec(),
    };
    seed_assets(&storage, &fonts).await;

    let (status, _, body) = get(state_for(storage), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"Ready");
}

#[tokio::test]
async fn test_json_metrics_endpoint() {
    let state = state_for(AssetStorage::in_memory());
    get(state.clone(), "/api/og").await;

    let (status, _, body) = get(state, "/api/metrics").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["metrics"]["requests"], 1);
    assert_eq!(json["metrics"]["render_errors"], 1);
    assert_eq!(json["asset_store"], "memory");
}

#[tokio::test]
async fn test_prometheus_endpoint_is_text() {
    let (status, headers, _) = get(state_for(AssetStorage::in_memory()), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}
