//! Render request model: query parameters, defaults and truncation.

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept from `title` and `description`.
pub const MAX_TEXT_CHARS: usize = 100;

/// Title used when the request carries no `title` parameter.
pub const DEFAULT_TITLE: &str = "Universal Zero Knowledge";

/// Description used when the request carries no `description` parameter.
pub const DEFAULT_DESCRIPTION: &str =
    "Get to market fast with dramatically lower development costs on the first general purpose zkVM";

/// Raw query parameters of `GET /api/og`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewParams {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PreviewParams {
    /// Build params from decoded query pairs. The first occurrence of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "title" => &mut params.title,
                "description" => &mut params.description,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// The effective text content of one preview image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub title: String,
    pub description: String,
}

impl RenderRequest {
    /// Build a request from optional inputs.
    ///
    /// An absent value falls back to the default text. A present value,
    /// even an empty one, is used as given after truncation.
    pub fn new(title: Option<&str>, description: Option<&str>) -> Self {
        Self {
            title: title.map_or_else(|| DEFAULT_TITLE.to_string(), truncate_chars),
            description: description.map_or_else(|| DEFAULT_DESCRIPTION.to_string(), truncate_chars),
        }
    }

    pub fn from_params(params: &PreviewParams) -> Self {
        Self::new(params.title.as_deref(), params.description.as_deref())
    }

    /// True when both fields equal the default text, whether or not they
    /// were supplied by the request.
    pub fn is_default(&self) -> bool {
        self.title == DEFAULT_TITLE && self.description == DEFAULT_DESCRIPTION
    }
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl From<PreviewParams> for RenderRequest {
    fn from(params: PreviewParams) -> Self {
        Self::from_params(&params)
    }
}

/// Keep the first `MAX_TEXT_CHARS` characters (Unicode scalar values).
pub fn truncate_chars(text: &str) -> String {
    match text.char_indices().nth(MAX_TEXT_CHARS) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
