//! Composition of the preview card.
//!
//! Draw order, back to front:
//! 1. solid background colour
//! 2. background photo, anchored to the right edge
//! 3. logo
//! 4. title and description

use image::{Rgba, RgbaImage};
use std::time::Instant;
use tracing::debug;

use og_common::{PreviewResult, RenderRequest};

use crate::layout::{PreviewLayout, TextBlock};
use crate::logo::rasterize_svg;
use crate::photo::load_photo;
use crate::png::encode_png;
use crate::style::{parse_hex_color, PreviewStyle};
use crate::text::{draw_line, PreviewFonts};

/// Raw inputs for one card.
#[derive(Debug, Clone, Copy)]
pub struct PreviewAssets<'a> {
    pub bold_font: &'a [u8],
    pub regular_font: &'a [u8],
    pub logo: &'a [u8],
    pub background: &'a [u8],
}

/// An encoded card plus the layout it was drawn from.
#[derive(Debug, Clone)]
pub struct RenderedPreview {
    pub png: Vec<u8>,
    pub layout: PreviewLayout,
    pub width: u32,
    pub height: u32,
}

/// Compose the card into an RGBA image.
///
/// Every asset is decoded before anything is drawn, so a bad asset fails
/// the call without producing a partial image.
pub fn compose_preview(
    request: &RenderRequest,
    assets: &PreviewAssets<'_>,
    style: &PreviewStyle,
) -> PreviewResult<(RgbaImage, PreviewLayout)> {
    let fonts = PreviewFonts::from_bytes(assets.bold_font, assets.regular_font)?;
    let photo = load_photo(assets.background, style.photo.width, style.photo.height)?;
    let logo = rasterize_svg(assets.logo, style.logo.width, style.logo.height)?;
    let background = parse_hex_color(&style.background)?;
    let title_color = parse_hex_color(&style.title.color)?;
    let description_color = parse_hex_color(&style.description.color)?;

    let layout = PreviewLayout::compute(request, &fonts, style);

    let mut canvas = RgbaImage::from_pixel(style.width, style.height, background);
    image::imageops::overlay(&mut canvas, &photo, style.photo.x, style.photo.y);
    image::imageops::overlay(&mut canvas, &logo, style.logo.x, style.logo.y);

    draw_block(&mut canvas, &fonts.bold, &layout.title, title_color);
    draw_block(&mut canvas, &fonts.regular, &layout.description, description_color);

    Ok((canvas, layout))
}

/// Compose the card with the default style and encode it as PNG.
pub fn render_preview(
    request: &RenderRequest,
    assets: &PreviewAssets<'_>,
) -> PreviewResult<RenderedPreview> {
    render_preview_with_style(request, assets, &PreviewStyle::default())
}

pub fn render_preview_with_style(
    request: &RenderRequest,
    assets: &PreviewAssets<'_>,
    style: &PreviewStyle,
) -> PreviewResult<RenderedPreview> {
    let start = Instant::now();
    let (canvas, layout) = compose_preview(request, assets, style)?;
    let composed_ms = start.elapsed().as_millis() as u64;

    let png = encode_png(&canvas)?;

    debug!(
        title_lines = layout.title.lines.len(),
        description_lines = layout.description.lines.len(),
        compose_ms = composed_ms,
        total_ms = start.elapsed().as_millis() as u64,
        bytes = png.len(),
        "Rendered preview"
    );

    Ok(RenderedPreview {
        png,
        width: canvas.width(),
        height: canvas.height(),
        layout,
    })
}

fn draw_block(canvas: &mut RgbaImage, font: &rusttype::Font<'_>, block: &TextBlock, color: Rgba<u8>) {
    let tracking = block.style.tracking_px();
    for line in &block.lines {
        draw_line(
            canvas,
            font,
            block.style.size_px,
            tracking,
            line.x,
            line.top,
            color,
            &line.text,
        );
    }
}
