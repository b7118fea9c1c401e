//! Rendering of social preview cards.
//!
//! - `style`: canvas size, colours, fonts sizes and fixed placements
//! - `text`: font loading, measuring, wrapping and glyph drawing
//! - `layout`: where each line, the logo and the photo go
//! - `logo`: SVG rasterisation
//! - `photo`: background photo decoding
//! - `compose`: drawing everything onto one canvas
//! - `png`: PNG encoding

pub mod compose;
pub mod layout;
pub mod logo;
pub mod photo;
pub mod png;
pub mod style;
pub mod text;

pub use compose::{
    compose_preview, render_preview, render_preview_with_style, PreviewAssets, RenderedPreview,
};
pub use layout::{PreviewLayout, TextBlock, TextLine};
pub use style::{Placement, PreviewStyle, TextStyle, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use text::PreviewFonts;
