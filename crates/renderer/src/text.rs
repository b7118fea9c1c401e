//! Text measurement, wrapping and drawing.

use image::{Rgba, RgbaImage};
use imageproc::pixelops::weighted_sum;
use rusttype::{point, Font, Scale};

use og_common::{PreviewError, PreviewResult};

/// The two fonts of the card.
pub struct PreviewFonts {
    pub bold: Font<'static>,
    pub regular: Font<'static>,
}

impl PreviewFonts {
    /// Parse both fonts. TrueType and CFF-flavoured OpenType are accepted.
    pub fn from_bytes(bold: &[u8], regular: &[u8]) -> PreviewResult<Self> {
        Ok(Self {
            bold: load_font(bold, "bold")?,
            regular: load_font(regular, "regular")?,
        })
    }
}

fn load_font(data: &[u8], name: &str) -> PreviewResult<Font<'static>> {
    Font::try_from_vec(data.to_vec())
        .ok_or_else(|| PreviewError::FontError(format!("{} font could not be parsed", name)))
}

/// Height of one line of text: ascent - descent + line gap.
pub fn line_height(font: &Font<'_>, size_px: f32) -> f32 {
    let v = font.v_metrics(Scale::uniform(size_px));
    v.ascent - v.descent + v.line_gap
}

/// Advance width of `text`, including kerning and letter spacing between
/// characters.
pub fn measure_line(font: &Font<'_>, size_px: f32, tracking_px: f32, text: &str) -> f32 {
    let scale = Scale::uniform(size_px);
    let mut width = 0.0;
    let mut previous = None;
    let mut count = 0usize;

    for ch in text.chars() {
        let glyph = font.glyph(ch).scaled(scale);
        if let Some(prev) = previous {
            width += font.pair_kerning(scale, prev, glyph.id());
        }
        width += glyph.h_metrics().advance_width;
        previous = Some(glyph.id());
        count += 1;
    }

    if count > 1 {
        width += tracking_px * (count - 1) as f32;
    }
    width
}

/// Greedy word wrap to `max_width`.
///
/// Runs of whitespace collapse to a single space. A word wider than
/// `max_width` on its own is broken between characters.
pub fn wrap_text(
    font: &Font<'_>,
    size_px: f32,
    tracking_px: f32,
    text: &str,
    max_width: f32,
) -> Vec<String> {
    let fits = |s: &str| measure_line(font, size_px, tracking_px, s) <= max_width;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
        } else {
            // Break the oversized word; the last piece stays open so the
            // next word can join it.
            for ch in word.chars() {
                let mut piece = current.clone();
                piece.push(ch);
                if current.is_empty() || fits(&piece) {
                    current = piece;
                } else {
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw one line of text with its top edge at `top`.
pub fn draw_line(
    img: &mut RgbaImage,
    font: &Font<'_>,
    size_px: f32,
    tracking_px: f32,
    x: f32,
    top: f32,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(size_px);
    let baseline = top + font.v_metrics(scale).ascent;
    let (width, height) = (img.width() as i32, img.height() as i32);
    let mut caret = x;
    let mut previous = None;

    for ch in text.chars() {
        let scaled = font.glyph(ch).scaled(scale);
        if let Some(prev) = previous {
            caret += font.pair_kerning(scale, prev, scaled.id());
        }
        let advance = scaled.h_metrics().advance_width;
        previous = Some(scaled.id());

        let glyph = scaled.positioned(point(caret, baseline));
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 || px >= width || py >= height || coverage <= 0.0 {
                    return;
                }
                let coverage = coverage.min(1.0);
                let dst = img.get_pixel_mut(px as u32, py as u32);
                *dst = weighted_sum(*dst, color, 1.0 - coverage, coverage);
            });
        }

        caret += advance + tracking_px;
    }
}
