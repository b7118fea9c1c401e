//! Storage abstractions for preview image assets.
//!
//! Provides:
//! - Object storage (local directory, S3/MinIO, in-memory) for static assets
//! - The catalog of asset keys
//! - An in-memory asset cache
//! - Concurrent loading of the per-render asset bundle

pub mod asset_cache;
pub mod asset_store;
pub mod catalog;
pub mod loader;

pub use asset_cache::{AssetCache, AssetCacheStats};
pub use asset_store::{AssetStorage, AssetStorageConfig, S3StorageConfig};
pub use catalog::AssetCatalog;
pub use loader::{AssetBundle, AssetLoader};
