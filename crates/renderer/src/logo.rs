//! Logo rasterisation from SVG.

use image::{Rgba, RgbaImage};

use og_common::{PreviewError, PreviewResult};

/// Rasterise an SVG document into a `width` x `height` RGBA image.
///
/// The drawing is scaled uniformly to fit and centred in the box.
pub fn rasterize_svg(data: &[u8], width: u32, height: u32) -> PreviewResult<RgbaImage> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt)
        .map_err(|e| PreviewError::SvgError(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        PreviewError::RenderError(format!("Cannot allocate {}x{} logo pixmap", width, height))
    })?;

    let svg_size = tree.size();
    let scale = (width as f32 / svg_size.width()).min(height as f32 / svg_size.height());
    let offset_x = (width as f32 - svg_size.width() * scale) / 2.0;
    let offset_y = (height as f32 - svg_size.height() * scale) / 2.0;

    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap_to_image(&pixmap))
}

/// Convert a premultiplied tiny-skia pixmap to a straight-alpha image.
fn pixmap_to_image(pixmap: &tiny_skia::Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}
