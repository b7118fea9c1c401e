//! Application state and shared resources.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use renderer::PreviewStyle;
use storage::{AssetCache, AssetLoader, AssetStorage};

use crate::config::ServiceConfig;
use crate::metrics::MetricsCollector;

/// Shared application state.
pub struct AppState {
    pub loader: AssetLoader,
    pub style: PreviewStyle,
    pub metrics: Arc<MetricsCollector>,
}

impl AppState {
    /// Connect to asset storage and, when enabled, load every asset up front.
    ///
    /// With preloading on, a missing or unreadable asset fails start-up.
    pub async fn new(config: &ServiceConfig) -> Result<Self> {
        let storage = AssetStorage::new(&config.storage)?;
        info!(store = %storage.label(), "Asset storage configured");

        let mut loader = AssetLoader::new(storage, config.catalog.clone());

        if config.preload_assets {
            loader = loader.with_cache(AssetCache::new());
            loader.preload().await?;
        } else {
            match loader.missing_assets().await {
                Ok(missing) if !missing.is_empty() => {
                    warn!(missing = ?missing, "Preview assets missing; requests will fail")
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "Could not check preview assets"),
            }
        }

        Ok(Self::from_loader(loader))
    }

    /// Build state around an existing loader with the default style.
    pub fn from_loader(loader: AssetLoader) -> Self {
        Self {
            loader,
            style: PreviewStyle::default(),
            metrics: Arc::new(MetricsCollector::new()),
        }
    }
}
