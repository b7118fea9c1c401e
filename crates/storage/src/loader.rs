//! Concurrent loading of the assets needed for one preview image.

use bytes::Bytes;
use futures::future::try_join_all;
use std::time::Instant;
use tracing::{debug, info, instrument};

use og_common::{BackgroundVariant, PreviewResult};

use crate::{AssetCache, AssetCatalog, AssetStorage};

/// The four buffers a single render needs.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    pub bold_font: Bytes,
    pub regular_font: Bytes,
    pub logo: Bytes,
    pub background: Bytes,
    pub variant: BackgroundVariant,
}

/// Loads assets from storage, optionally through an in-memory cache.
#[derive(Debug, Clone)]
pub struct AssetLoader {
    storage: AssetStorage,
    catalog: AssetCatalog,
    cache: Option<AssetCache>,
}

impl AssetLoader {
    pub fn new(storage: AssetStorage, catalog: AssetCatalog) -> Self {
        Self {
            storage,
            catalog,
            cache: None,
        }
    }

    /// Serve repeated reads from memory.
    pub fn with_cache(mut self, cache: AssetCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn storage(&self) -> &AssetStorage {
        &self.storage
    }

    pub fn cache(&self) -> Option<&AssetCache> {
        self.cache.as_ref()
    }

    /// Read a single asset, consulting the cache first.
    pub async fn fetch(&self, key: &str) -> PreviewResult<Bytes> {
        if let Some(cache) = &self.cache {
            if let Some(data) = cache.get(key).await {
                return Ok(data);
            }
        }

        let data = self.storage.get(key).await?;

        if let Some(cache) = &self.cache {
            cache.insert(key, data.clone()).await;
        }
        Ok(data)
    }

    /// Fetch both fonts, the logo and the chosen photo concurrently.
    ///
    /// Fails as soon as any fetch fails; no partial bundle is returned.
    #[instrument(skip(self), fields(variant = %variant))]
    pub async fn load(&self, variant: BackgroundVariant) -> PreviewResult<AssetBundle> {
        let start = Instant::now();

        let (bold_font, regular_font, logo, background) = tokio::try_join!(
            self.fetch(&self.catalog.bold_font),
            self.fetch(&self.catalog.regular_font),
            self.fetch(&self.catalog.logo),
            self.fetch(self.catalog.background(variant)),
        )?;

        debug!(
            bytes = bold_font.len() + regular_font.len() + logo.len() + background.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded asset bundle"
        );

        Ok(AssetBundle {
            bold_font,
            regular_font,
            logo,
            background,
            variant,
        })
    }

    /// Fetch every catalog asset into the cache.
    ///
    /// Returns the number of bytes loaded. Without a cache this only
    /// verifies that every asset can be read.
    #[instrument(skip(self))]
    pub async fn preload(&self) -> PreviewResult<u64> {
        let keys = self.catalog.all_keys();
        let loaded = try_join_all(keys.iter().map(|key| self.fetch(key))).await?;
        let total: u64 = loaded.iter().map(|b| b.len() as u64).sum();

        info!(
            assets = loaded.len(),
            bytes = total,
            store = %self.storage.label(),
            "Preloaded preview assets"
        );
        Ok(total)
    }

    /// Keys of catalog assets that are absent from storage.
    pub async fn missing_assets(&self) -> PreviewResult<Vec<String>> {
        let mut missing = Vec::new();
        for key in self.catalog.all_keys() {
            if !self.storage.exists(key).await? {
                missing.push(key.to_string());
            }
        }
        Ok(missing)
    }
}
