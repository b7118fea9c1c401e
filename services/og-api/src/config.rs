//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};

use og_common::{PreviewError, PreviewResult};
use storage::{AssetCatalog, AssetStorageConfig, S3StorageConfig};

/// Where static assets are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AssetBackend {
    /// A local directory (the site's `public/` tree)
    Local,
    /// An S3-compatible bucket
    S3,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "og-api")]
#[command(about = "Social preview image server")]
pub struct Args {
    /// Listen address
    #[arg(short, long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Number of tokio worker threads (default: number of CPU cores)
    #[arg(long, env = "TOKIO_WORKER_THREADS")]
    pub worker_threads: Option<usize>,

    /// Asset storage backend
    #[arg(long, env = "ASSET_BACKEND", value_enum, default_value = "local")]
    pub asset_backend: AssetBackend,

    /// Asset directory for the local backend
    #[arg(long, env = "ASSET_DIR", default_value = "./public")]
    pub asset_dir: String,

    /// Load every asset into memory at start-up and fail if any is missing
    #[arg(long, env = "PRELOAD_ASSETS", default_value_t = true, action = clap::ArgAction::Set)]
    pub preload_assets: bool,

    /// S3/MinIO endpoint URL
    #[arg(long, env = "S3_ENDPOINT", default_value = "http://minio:9000")]
    pub s3_endpoint: String,

    /// S3 bucket holding the assets
    #[arg(long, env = "S3_BUCKET", default_value = "site-assets")]
    pub s3_bucket: String,

    #[arg(long, env = "S3_ACCESS_KEY", default_value = "minioadmin", hide_env_values = true)]
    pub s3_access_key: String,

    #[arg(long, env = "S3_SECRET_KEY", default_value = "minioadmin", hide_env_values = true)]
    pub s3_secret_key: String,

    #[arg(long, env = "S3_REGION", default_value = "us-east-1")]
    pub s3_region: String,

    /// Bold (title) font key
    #[arg(long, env = "OG_FONT_BOLD", default_value = "fonts/EuropaGroteskSH-Med.otf")]
    pub font_bold: String,

    /// Regular (description) font key
    #[arg(long, env = "OG_FONT_REGULAR", default_value = "fonts/EuropaGroteskSH-Reg.otf")]
    pub font_regular: String,

    /// Logo SVG key
    #[arg(long, env = "OG_LOGO", default_value = "og/logo.svg")]
    pub logo: String,

    #[arg(long, env = "OG_BACKGROUND_1", default_value = "og/og-1.jpg")]
    pub background_1: String,

    #[arg(long, env = "OG_BACKGROUND_2", default_value = "og/og-2.jpg")]
    pub background_2: String,

    #[arg(long, env = "OG_BACKGROUND_3", default_value = "og/og-3.jpg")]
    pub background_3: String,
}

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub storage: AssetStorageConfig,
    pub catalog: AssetCatalog,
    pub preload_assets: bool,
}

impl ServiceConfig {
    pub fn from_args(args: &Args) -> PreviewResult<Self> {
        let storage = match args.asset_backend {
            AssetBackend::Local => {
                if args.asset_dir.trim().is_empty() {
                    return Err(PreviewError::ConfigError(
                        "ASSET_DIR must not be empty".to_string(),
                    ));
                }
                AssetStorageConfig::Local {
                    root: args.asset_dir.clone(),
                }
            }
            AssetBackend::S3 => AssetStorageConfig::S3(S3StorageConfig {
                endpoint: args.s3_endpoint.clone(),
                bucket: args.s3_bucket.clone(),
                access_key_id: args.s3_access_key.clone(),
                secret_access_key: args.s3_secret_key.clone(),
                region: args.s3_region.clone(),
                allow_http: args.s3_endpoint.starts_with("http://"),
            }),
        };

        let catalog = AssetCatalog {
            bold_font: args.font_bold.clone(),
            regular_font: args.font_regular.clone(),
            logo: args.logo.clone(),
            backgrounds: [
                args.background_1.clone(),
                args.background_2.clone(),
                args.background_3.clone(),
            ],
        };

        Ok(Self {
            storage,
            catalog,
            preload_assets: args.preload_assets,
        })
    }
}

/// Map a `--log-level` string to a tracing level; unknown values mean info.
pub fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
