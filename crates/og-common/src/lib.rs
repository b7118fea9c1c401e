//! Common types shared across the preview image crates.

pub mod background;
pub mod error;
pub mod request;

pub use background::BackgroundVariant;
pub use error::{PreviewError, PreviewResult};
pub use request::{
    truncate_chars, PreviewParams, RenderRequest, DEFAULT_DESCRIPTION, DEFAULT_TITLE,
    MAX_TEXT_CHARS,
};
