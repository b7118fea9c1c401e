//! Visual style of the preview card.
//!
//! Sizes are in pixels on the 1200x630 canvas. Letter spacing is expressed
//! in em, as on the website the card mirrors.

use image::Rgba;
use serde::{Deserialize, Serialize};

use og_common::{PreviewError, PreviewResult};

/// Fixed output width.
pub const CANVAS_WIDTH: u32 = 1200;
/// Fixed output height.
pub const CANVAS_HEIGHT: u32 = 630;

/// Style of one block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size_px: f32,
    /// Letter spacing in em
    pub tracking_em: f32,
    /// Hex colour, "#RRGGBB"
    pub color: String,
    /// Space above the block
    pub margin_top: f32,
    /// Space below the block
    pub margin_bottom: f32,
}

impl TextStyle {
    /// Letter spacing in pixels.
    pub fn tracking_px(&self) -> f32 {
        self.tracking_em * self.size_px
    }
}

/// A placed, sized box on the canvas. `x`/`y` may be negative or extend
/// past the canvas; drawing clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Everything that determines how the card looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewStyle {
    pub width: u32,
    pub height: u32,
    /// Solid background colour
    pub background: String,
    /// Left padding of the text column
    pub padding_left: f32,
    /// Fraction of the content width text may occupy
    pub max_text_fraction: f32,
    pub logo: Placement,
    /// Background photo box; anchored to the right edge, may overhang
    pub photo: Placement,
    pub title: TextStyle,
    pub description: TextStyle,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        let photo_width = 404;
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: "#fdff9d".to_string(),
            padding_left: 48.0,
            max_text_fraction: 0.65,
            logo: Placement {
                x: 48,
                y: 48,
                width: 128,
                height: 93,
            },
            // right: -42px
            photo: Placement {
                x: CANVAS_WIDTH as i64 - photo_width as i64 + 42,
                y: 0,
                width: photo_width,
                height: 701,
            },
            title: TextStyle {
                size_px: 92.0,
                tracking_em: 0.025,
                color: "#000000".to_string(),
                margin_top: 96.0,
                margin_bottom: 24.0,
            },
            description: TextStyle {
                size_px: 32.0,
                tracking_em: 0.05,
                color: "#404040".to_string(),
                margin_top: 0.0,
                margin_bottom: 0.0,
            },
        }
    }
}

impl PreviewStyle {
    /// Maximum width of a line of text.
    pub fn max_text_width(&self) -> f32 {
        (self.width as f32 - self.padding_left) * self.max_text_fraction
    }
}

/// Parse "#RRGGBB" or "#RRGGBBAA".
pub fn parse_hex_color(s: &str) -> PreviewResult<Rgba<u8>> {
    let hex = s.trim().trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .ok_or_else(|| PreviewError::RenderError(format!("Invalid color: {}", s)))
    };

    match hex.len() {
        6 => Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255])),
        8 => Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, channel(6)?])),
        _ => Err(PreviewError::RenderError(format!("Invalid color: {}", s))),
    }
}
