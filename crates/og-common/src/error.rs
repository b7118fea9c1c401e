//! Error types for the preview image service.

use thiserror::Error;

/// Result type alias using PreviewError.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Primary error type for preview generation.
///
/// Every variant is a generation failure from the caller's point of view;
/// the variants only exist so logs and metrics can tell causes apart.
#[derive(Debug, Error)]
pub enum PreviewError {
    // === Asset Errors ===
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    // === Decoding Errors ===
    #[error("Invalid font data: {0}")]
    FontError(String),

    #[error("Failed to decode image: {0}")]
    ImageDecodeError(String),

    #[error("Invalid SVG: {0}")]
    SvgError(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("Encoding failed: {0}")]
    EncodeError(String),

    // === Infrastructure Errors ===
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl PreviewError {
    /// Short, stable label used as a metrics dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            PreviewError::AssetNotFound(_) => "asset_not_found",
            PreviewError::StorageError(_) => "storage",
            PreviewError::FontError(_) => "font",
            PreviewError::ImageDecodeError(_) => "image_decode",
            PreviewError::SvgError(_) => "svg",
            PreviewError::RenderError(_) => "render",
            PreviewError::EncodeError(_) => "encode",
            PreviewError::ConfigError(_) => "config",
            PreviewError::InternalError(_) => "internal",
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// Callers never see the cause, so every failure maps to 500.
    pub fn http_status_code(&self) -> u16 {
        500
    }
}

impl From<std::io::Error> for PreviewError {
    fn from(err: std::io::Error) -> Self {
        PreviewError::InternalError(err.to_string())
    }
}
