//! Background photo decoding.

use image::imageops::FilterType;
use image::RgbaImage;

use og_common::{PreviewError, PreviewResult};

/// Decode a photo (JPEG, PNG, ...) and stretch it to `width` x `height`.
pub fn load_photo(data: &[u8], width: u32, height: u32) -> PreviewResult<RgbaImage> {
    let img = image::load_from_memory(data)
        .map_err(|e| PreviewError::ImageDecodeError(e.to_string()))?
        .to_rgba8();

    if img.dimensions() == (width, height) {
        return Ok(img);
    }
    Ok(image::imageops::resize(&img, width, height, FilterType::Triangle))
}
