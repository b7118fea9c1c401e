//! `GET /api/og`: the social preview image endpoint.

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use og_common::{BackgroundVariant, PreviewError, PreviewParams, PreviewResult, RenderRequest};
use renderer::{render_preview_with_style, PreviewAssets, RenderedPreview};

use crate::metrics::Timer;
use crate::state::AppState;

/// Cache policy for generated images. Output depends only on the query
/// string and the photo choice, so clients may keep it for a year.
pub const CACHE_CONTROL: &str = "public, immutable, no-transform, max-age=31536000";

/// Body of every failed generation.
pub const FAILURE_BODY: &str = "Failed to generate the image";

/// GET /api/og?title=..&description=..
///
/// Query pairs are taken raw so that a repeated key resolves to its first
/// occurrence instead of rejecting the request.
#[instrument(skip_all)]
pub async fn og_image_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    state.metrics.record_request();

    let request = RenderRequest::from(PreviewParams::from_pairs(pairs));
    let variant = BackgroundVariant::random();
    state.metrics.record_background(variant);
    let title_len = request.title.chars().count();

    match generate_preview(&state, request, variant).await {
        Ok(rendered) => {
            debug!(
                variant = %variant,
                title_len = title_len,
                bytes = rendered.png.len(),
                "Generated preview image"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "image/png"),
                    (header::CACHE_CONTROL, CACHE_CONTROL),
                ],
                rendered.png,
            )
                .into_response()
        }
        Err(e) => {
            state.metrics.record_error(&e);
            error!(error = %e, kind = e.kind(), variant = %variant, "Preview generation failed");
            failure_response()
        }
    }
}

/// Load the asset bundle for `variant` and render the card off the async
/// runtime.
pub async fn generate_preview(
    state: &AppState,
    request: RenderRequest,
    variant: BackgroundVariant,
) -> PreviewResult<RenderedPreview> {
    let load_timer = Timer::start();
    let bundle = state.loader.load(variant).await?;
    state.metrics.record_asset_load(load_timer.elapsed_us()).await;

    let style = state.style.clone();
    let render_timer = Timer::start();
    let rendered = tokio::task::spawn_blocking(move || {
        let assets = PreviewAssets {
            bold_font: &bundle.bold_font,
            regular_font: &bundle.regular_font,
            logo: &bundle.logo,
            background: &bundle.background,
        };
        render_preview_with_style(&request, &assets, &style)
    })
    .await
    .map_err(|e| PreviewError::InternalError(format!("Render task failed: {}", e)))??;

    state.metrics.record_render(render_timer.elapsed_us()).await;
    Ok(rendered)
}

/// The single failure response: status 500 with a fixed plain-text body.
pub fn failure_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        FAILURE_BODY,
    )
        .into_response()
}
