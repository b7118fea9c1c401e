//! HTTP request handlers.
//!
//! - `og`: the preview image endpoint
//! - `health`: health checks, Prometheus and JSON metrics

pub mod health;
pub mod og;

pub use health::{api_metrics_handler, health_handler, metrics_handler, ready_handler};
pub use og::{failure_response, generate_preview, og_image_handler, CACHE_CONTROL, FAILURE_BODY};
