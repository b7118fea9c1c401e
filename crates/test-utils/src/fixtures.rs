//! Generated asset fixtures for preview tests.
//!
//! Real site assets are not checked into the repository, so tests build
//! stand-ins with the same formats: an SVG logo and JPEG background photos.

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, ImageBuffer, Rgb};

/// Logo stand-in with the same intrinsic size as the site logo (163x118).
pub const LOGO_SVG: &str = r##"<svg width="163" height="118" fill="none" xmlns="http://www.w3.org/2000/svg">
  <path d="M0 0h70v44H0zM92 0h70v44H92zM0 74h70v44H0zM92 74h70v44H92z" fill="#000"/>
</svg>"##;

/// Logo SVG bytes.
pub fn fixture_logo_svg() -> Vec<u8> {
    LOGO_SVG.as_bytes().to_vec()
}

/// Encode a solid-colour JPEG of the given size.
pub fn fixture_photo_jpeg(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgb(rgb));
    encode_jpeg(&img)
}

/// Encode a JPEG with a vertical gradient from `top` to `bottom`.
pub fn fixture_gradient_jpeg(width: u32, height: u32, top: [u8; 3], bottom: [u8; 3]) -> Vec<u8> {
    let img = ImageBuffer::from_fn(width, height, |_, y| {
        let t = if height > 1 {
            y as f32 / (height - 1) as f32
        } else {
            0.0
        };
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb([mix(top[0], bottom[0]), mix(top[1], bottom[1]), mix(top[2], bottom[2])])
    });
    encode_jpeg(&img)
}

fn encode_jpeg(img: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Vec<u8> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, 95)
        .encode(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)
        .expect("Failed to encode fixture JPEG");
    buf
}

/// Fonts used by rendering tests.
#[derive(Debug, Clone)]
pub struct FontFixtures {
    pub bold: Vec<u8>,
    pub regular: Vec<u8>,
}

/// Candidate file names for the bold and regular fixture fonts, in order of
/// preference.
pub const BOLD_FONT_CANDIDATES: &[&str] = &[
    "EuropaGroteskSH-Med.otf",
    "DejaVuSans-Bold.ttf",
    "LiberationSans-Bold.ttf",
];
pub const REGULAR_FONT_CANDIDATES: &[&str] = &[
    "EuropaGroteskSH-Reg.otf",
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
];

/// Load a bold/regular font pair, if one can be found.
pub fn load_font_fixtures() -> Option<FontFixtures> {
    let bold = BOLD_FONT_CANDIDATES
        .iter()
        .find_map(|name| crate::find_test_font(name))?;
    let regular = REGULAR_FONT_CANDIDATES
        .iter()
        .find_map(|name| crate::find_test_font(name))?;

    Some(FontFixtures {
        bold: std::fs::read(bold).ok()?,
        regular: std::fs::read(regular).ok()?,
    })
}
