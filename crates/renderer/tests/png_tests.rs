//! Tests for PNG encoding of composed cards.
//!
//! Encoded output is decoded with the `image` crate to check that the
//! filtered scanlines reproduce the original pixels exactly.

use image::{Rgba, RgbaImage};
use renderer::png::{create_png, encode_png, read_png_dimensions, PNG_SIGNATURE};

// ============================================================================
// Helper functions
// ============================================================================

/// Card-like image: flat yellow with a vertical gradient band on the right.
fn card_like_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if x * 10 > width * 7 {
            let shade = (y * 255 / height.max(1)) as u8;
            Rgba([shade, 255 - shade, (x % 256) as u8, 255])
        } else {
            Rgba([253, 255, 157, 255])
        }
    })
}

#[test]
fn test_signature_and_header() {
    let png = encode_png(&card_like_image(1200, 630)).unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);
    assert_eq!(&png[12..16], b"IHDR");
    assert_eq!(read_png_dimensions(&png), Some((1200, 630)));
}

#[test]
fn test_opaque_round_trip_is_lossless() {
    let original = card_like_image(64, 48);
    let png = encode_png(&original).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), original.dimensions());
    assert_eq!(decoded.as_raw(), original.as_raw());
}

#[test]
fn test_translucent_round_trip_is_lossless() {
    let original = RgbaImage::from_fn(17, 9, |x, y| Rgba([x as u8 * 10, y as u8 * 20, 7, (x * y) as u8]));
    let png = create_png(original.as_raw(), 17, 9).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.as_raw(), original.as_raw());
}

#[test]
fn test_flat_image_compresses_well() {
    let flat = RgbaImage::from_pixel(1200, 630, Rgba([253, 255, 157, 255]));
    let png = encode_png(&flat).unwrap();
    // 2.2 MB of raw RGB collapses to a few KB
    assert!(png.len() < 20_000, "flat card encoded to {} bytes", png.len());
}

#[test]
fn test_chunks_end_with_iend() {
    let png = encode_png(&card_like_image(8, 8)).unwrap();
    assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
}
