//! Object storage interface for static preview assets.
//!
//! Assets live either in a local directory (the site's `public/` tree), in an
//! S3-compatible bucket, or in memory for tests. All access is read-mostly;
//! `put` exists for seeding stores.

use bytes::Bytes;
use object_store::{
    aws::AmazonS3Builder, local::LocalFileSystem, memory::InMemory, path::Path, ObjectStore,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

use og_common::{PreviewError, PreviewResult};

/// Configuration for S3/MinIO asset storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3StorageConfig {
    /// S3/MinIO endpoint URL
    pub endpoint: String,
    /// Bucket name
    pub bucket: String,
    /// Access key ID
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// AWS region (use "us-east-1" for MinIO)
    pub region: String,
    /// Allow HTTP (for local MinIO)
    pub allow_http: bool,
}

impl Default for S3StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://minio:9000".to_string(),
            bucket: "site-assets".to_string(),
            access_key_id: "minioadmin".to_string(),
            secret_access_key: "minioadmin".to_string(),
            region: "us-east-1".to_string(),
            allow_http: true,
        }
    }
}

/// Where assets are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum AssetStorageConfig {
    /// A directory on the local filesystem.
    Local { root: String },
    /// An S3-compatible bucket.
    S3(S3StorageConfig),
}

impl Default for AssetStorageConfig {
    fn default() -> Self {
        AssetStorageConfig::Local {
            root: "./public".to_string(),
        }
    }
}

/// Read access to static assets.
#[derive(Clone)]
pub struct AssetStorage {
    store: Arc<dyn ObjectStore>,
    label: String,
}

impl std::fmt::Debug for AssetStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetStorage")
            .field("label", &self.label)
            .finish()
    }
}

impl AssetStorage {
    /// Create an asset storage client from config.
    pub fn new(config: &AssetStorageConfig) -> PreviewResult<Self> {
        match config {
            AssetStorageConfig::Local { root } => {
                let store = LocalFileSystem::new_with_prefix(root).map_err(|e| {
                    PreviewError::ConfigError(format!("Invalid asset directory {}: {}", root, e))
                })?;
                Ok(Self::from_store(Arc::new(store), format!("file://{}", root)))
            }
            AssetStorageConfig::S3(s3) => {
                let mut builder = AmazonS3Builder::new()
                    .with_endpoint(&s3.endpoint)
                    .with_bucket_name(&s3.bucket)
                    .with_access_key_id(&s3.access_key_id)
                    .with_secret_access_key(&s3.secret_access_key)
                    .with_region(&s3.region);

                if s3.allow_http {
                    builder = builder.with_allow_http(true);
                }

                let store = builder.build().map_err(|e| {
                    PreviewError::ConfigError(format!("Failed to create S3 client: {}", e))
                })?;
                Ok(Self::from_store(Arc::new(store), format!("s3://{}", s3.bucket)))
            }
        }
    }

    /// Wrap an existing object store.
    pub fn from_store(store: Arc<dyn ObjectStore>, label: impl Into<String>) -> Self {
        Self {
            store,
            label: label.into(),
        }
    }

    /// An empty in-memory store.
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(InMemory::new()), "memory")
    }

    /// Human-readable location of the store, for logs.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Read an asset.
    #[instrument(skip(self), fields(store = %self.label, key = %key))]
    pub async fn get(&self, key: &str) -> PreviewResult<Bytes> {
        let location = Path::from(key);

        let result = self.store.get(&location).await.map_err(|e| map_store_error(key, e))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| map_store_error(key, e))?;

        debug!(size = bytes.len(), "Read asset");
        Ok(bytes)
    }

    /// Write an asset.
    #[instrument(skip(self, data), fields(store = %self.label, key = %key))]
    pub async fn put(&self, key: &str, data: Bytes) -> PreviewResult<()> {
        let location = Path::from(key);
        debug!(size = data.len(), "Writing asset");

        self.store
            .put(&location, data.into())
            .await
            .map_err(|e| PreviewError::StorageError(format!("Failed to write {}: {}", key, e)))?;

        Ok(())
    }

    /// Check if an asset exists.
    pub async fn exists(&self, key: &str) -> PreviewResult<bool> {
        let location = Path::from(key);

        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(PreviewError::StorageError(format!(
                "Failed to check {}: {}",
                key, e
            ))),
        }
    }
}

fn map_store_error(key: &str, err: object_store::Error) -> PreviewError {
    match err {
        object_store::Error::NotFound { .. } => PreviewError::AssetNotFound(key.to_string()),
        other => PreviewError::StorageError(format!("Failed to read {}: {}", key, other)),
    }
}
