//! Placement of text, logo and photo on the card.
//!
//! The text column is a flex-style block: title (with its margins) followed
//! by the description, centred vertically on the canvas and left-aligned at
//! the padding. The logo and photo are absolutely positioned.

use rusttype::Font;
use serde::Serialize;

use og_common::RenderRequest;

use crate::style::{Placement, PreviewStyle, TextStyle};
use crate::text::{line_height, measure_line, wrap_text, PreviewFonts};

/// One laid-out line of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub text: String,
    /// Left edge of the pen
    pub x: f32,
    /// Top edge of the line box
    pub top: f32,
    /// Measured advance width
    pub width: f32,
}

/// A wrapped block of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
    pub line_height: f32,
    pub style: TextStyle,
}

impl TextBlock {
    /// Lines joined with single spaces.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Total height of the lines, excluding margins.
    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    /// Widest line.
    pub fn max_width(&self) -> f32 {
        self.lines.iter().map(|l| l.width).fold(0.0, f32::max)
    }
}

/// Where everything on the card goes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewLayout {
    pub width: u32,
    pub height: u32,
    pub title: TextBlock,
    pub description: TextBlock,
    pub logo: Placement,
    pub photo: Placement,
}

impl PreviewLayout {
    /// Lay out a request with the given fonts and style.
    pub fn compute(request: &RenderRequest, fonts: &PreviewFonts, style: &PreviewStyle) -> Self {
        let max_width = style.max_text_width();
        let x = style.padding_left;

        let title_lines = wrap_text(
            &fonts.bold,
            style.title.size_px,
            style.title.tracking_px(),
            &request.title,
            max_width,
        );
        let description_lines = wrap_text(
            &fonts.regular,
            style.description.size_px,
            style.description.tracking_px(),
            &request.description,
            max_width,
        );

        let title_line_height = line_height(&fonts.bold, style.title.size_px);
        let description_line_height = line_height(&fonts.regular, style.description.size_px);

        let block_height = style.title.margin_top
            + title_lines.len() as f32 * title_line_height
            + style.title.margin_bottom
            + style.description.margin_top
            + description_lines.len() as f32 * description_line_height
            + style.description.margin_bottom;

        // justify-content: center; overflow spills equally both ways
        let block_top = (style.height as f32 - block_height) / 2.0;

        let title_top = block_top + style.title.margin_top;
        let title = place_block(
            &fonts.bold,
            title_lines,
            &style.title,
            title_line_height,
            x,
            title_top,
        );

        let description_top = title_top
            + title.height()
            + style.title.margin_bottom
            + style.description.margin_top;
        let description = place_block(
            &fonts.regular,
            description_lines,
            &style.description,
            description_line_height,
            x,
            description_top,
        );

        Self {
            width: style.width,
            height: style.height,
            title,
            description,
            logo: style.logo,
            photo: style.photo,
        }
    }
}

fn place_block(
    font: &Font<'_>,
    lines: Vec<String>,
    style: &TextStyle,
    line_height: f32,
    x: f32,
    top: f32,
) -> TextBlock {
    let lines = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| TextLine {
            width: measure_line(font, style.size_px, style.tracking_px(), &text),
            text,
            x,
            top: top + i as f32 * line_height,
        })
        .collect();

    TextBlock {
        lines,
        line_height,
        style: style.clone(),
    }
}
