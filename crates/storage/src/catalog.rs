//! Object keys of the static assets a preview image is built from.

use og_common::BackgroundVariant;
use serde::{Deserialize, Serialize};

/// Keys of the six static assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCatalog {
    /// Bold (medium weight) font used for the title
    pub bold_font: String,
    /// Regular font used for the description
    pub regular_font: String,
    /// Logo SVG drawn in the top-left corner
    pub logo: String,
    /// Background photos, indexed by variant
    pub backgrounds: [String; 3],
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self {
            bold_font: "fonts/EuropaGroteskSH-Med.otf".to_string(),
            regular_font: "fonts/EuropaGroteskSH-Reg.otf".to_string(),
            logo: "og/logo.svg".to_string(),
            backgrounds: [
                "og/og-1.jpg".to_string(),
                "og/og-2.jpg".to_string(),
                "og/og-3.jpg".to_string(),
            ],
        }
    }
}

impl AssetCatalog {
    /// Key of the background photo for a variant.
    pub fn background(&self, variant: BackgroundVariant) -> &str {
        &self.backgrounds[(variant.index() - 1) as usize]
    }

    /// Every key in the catalog.
    pub fn all_keys(&self) -> Vec<&str> {
        let mut keys = vec![
            self.bold_font.as_str(),
            self.regular_font.as_str(),
            self.logo.as_str(),
        ];
        keys.extend(self.backgrounds.iter().map(String::as_str));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_keys_follow_variant() {
        let catalog = AssetCatalog::default();
        assert_eq!(catalog.background(BackgroundVariant::First), "og/og-1.jpg");
        assert_eq!(catalog.background(BackgroundVariant::Second), "og/og-2.jpg");
        assert_eq!(catalog.background(BackgroundVariant::Third), "og/og-3.jpg");
    }

    #[test]
    fn test_all_keys() {
        let catalog = AssetCatalog::default();
        let keys = catalog.all_keys();
        assert_eq!(keys.len(), 6);
        assert!(keys.contains(&"og/logo.svg"));
    }
}
