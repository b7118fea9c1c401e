//! PNG encoding for the composed card.
//!
//! Supports two encoding modes:
//! - **RGB PNG (color type 2)**: Used when every pixel is opaque, which is
//!   the normal case for the card. A quarter smaller before compression.
//! - **RGBA PNG (color type 6)**: Fallback when any pixel has alpha < 255.
//!
//! Scanlines use the Sub filter, which suits photographic content far
//! better than no filter.

use image::RgbaImage;
use std::io::Write;

use og_common::{PreviewError, PreviewResult};

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const COLOR_TYPE_RGB: u8 = 2;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_SUB: u8 = 1;

/// Encode an image, choosing RGB or RGBA automatically.
pub fn encode_png(img: &RgbaImage) -> PreviewResult<Vec<u8>> {
    create_png(img.as_raw(), img.width() as usize, img.height() as usize)
}

/// Create a PNG from raw RGBA pixel data (4 bytes per pixel).
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> PreviewResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(PreviewError::EncodeError(format!(
            "Invalid image size {}x{}",
            width, height
        )));
    }
    if pixels.len() != width * height * 4 {
        return Err(PreviewError::EncodeError(format!(
            "Expected {} bytes of RGBA data for {}x{}, got {}",
            width * height * 4,
            width,
            height,
            pixels.len()
        )));
    }

    let opaque = pixels.chunks_exact(4).all(|p| p[3] == 255);
    let (color_type, channels) = if opaque {
        (COLOR_TYPE_RGB, 3)
    } else {
        (COLOR_TYPE_RGBA, 4)
    };

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(color_type);
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_idat(pixels, width, height, channels)
        .map_err(|e| PreviewError::EncodeError(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Read width and height from a PNG header.
pub fn read_png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < 24 || data[..8] != PNG_SIGNATURE || &data[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(data[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(data[20..24].try_into().ok()?);
    Some((width, height))
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Filter scanlines (Sub) and zlib-compress them.
fn deflate_idat(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> std::io::Result<Vec<u8>> {
    let stride = width * channels;
    let mut filtered = Vec::with_capacity(height * (1 + stride));
    let mut row = Vec::with_capacity(stride);

    for y in 0..height {
        row.clear();
        let src = &pixels[y * width * 4..(y + 1) * width * 4];
        for px in src.chunks_exact(4) {
            row.extend_from_slice(&px[..channels]);
        }

        filtered.push(FILTER_SUB);
        for i in 0..stride {
            let left = if i >= channels { row[i - channels] } else { 0 };
            filtered.push(row[i].wrapping_sub(left));
        }
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&filtered)?;
    encoder.finish()
}
