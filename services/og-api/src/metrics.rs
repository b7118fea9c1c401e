//! Application metrics collection and reporting.

use metrics::{counter, histogram};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::sync::RwLock;

use og_common::{BackgroundVariant, PreviewError};

/// Metrics collector for the preview API.
#[derive(Debug)]
pub struct MetricsCollector {
    /// Request counts
    pub requests: AtomicU64,
    pub renders_total: AtomicU64,
    pub render_errors: AtomicU64,

    /// Times each background photo was chosen
    background_counts: [AtomicU64; 3],

    /// Timing stats (stored as microseconds)
    render_times: RwLock<TimingStats>,
    asset_load_times: RwLock<TimingStats>,

    /// Start time for uptime calculation
    start_time: Instant,
}

#[derive(Debug, Default)]
struct TimingStats {
    count: u64,
    total_us: u64,
    min_us: u64,
    max_us: u64,
    last_us: u64,
}

impl TimingStats {
    fn record(&mut self, duration_us: u64) {
        self.count += 1;
        self.total_us += duration_us;
        self.last_us = duration_us;
        if self.min_us == 0 || duration_us < self.min_us {
            self.min_us = duration_us;
        }
        if duration_us > self.max_us {
            self.max_us = duration_us;
        }
    }

    fn avg_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.total_us as f64 / self.count as f64) / 1000.0
        }
    }

    fn snapshot(&self) -> TimingSnapshot {
        TimingSnapshot {
            count: self.count,
            avg_ms: self.avg_ms(),
            min_ms: self.min_us as f64 / 1000.0,
            max_ms: self.max_us as f64 / 1000.0,
            last_ms: self.last_us as f64 / 1000.0,
        }
    }
}

/// Point-in-time view of a timing series.
#[derive(Debug, Clone, Serialize)]
pub struct TimingSnapshot {
    pub count: u64,
    pub avg_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub last_ms: f64,
}

/// Point-in-time view of all metrics, served as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_secs: u64,
    pub requests: u64,
    pub renders: u64,
    pub render_errors: u64,
    pub backgrounds: [u64; 3],
    pub render: TimingSnapshot,
    pub asset_load: TimingSnapshot,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
            renders_total: AtomicU64::new(0),
            render_errors: AtomicU64::new(0),
            background_counts: Default::default(),
            render_times: RwLock::new(TimingStats::default()),
            asset_load_times: RwLock::new(TimingStats::default()),
            start_time: Instant::now(),
        }
    }

    /// Record an incoming preview request
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        counter!("og_requests_total").increment(1);
    }

    /// Record which background photo a request used
    pub fn record_background(&self, variant: BackgroundVariant) {
        self.background_counts[(variant.index() - 1) as usize].fetch_add(1, Ordering::Relaxed);
        counter!("og_background_selected_total", "variant" => variant.label()).increment(1);
    }

    /// Record asset bundle load time
    pub async fn record_asset_load(&self, duration_us: u64) {
        histogram!("og_asset_load_ms").record(duration_us as f64 / 1000.0);
        self.asset_load_times.write().await.record(duration_us);
    }

    /// Record a successful render
    pub async fn record_render(&self, duration_us: u64) {
        self.renders_total.fetch_add(1, Ordering::Relaxed);
        counter!("og_renders_total").increment(1);
        histogram!("og_render_ms").record(duration_us as f64 / 1000.0);
        self.render_times.write().await.record(duration_us);
    }

    /// Record a failed request
    pub fn record_error(&self, err: &PreviewError) {
        self.render_errors.fetch_add(1, Ordering::Relaxed);
        counter!("og_render_errors_total", "kind" => err.kind()).increment(1);
    }

    pub fn background_counts(&self) -> [u64; 3] {
        [
            self.background_counts[0].load(Ordering::Relaxed),
            self.background_counts[1].load(Ordering::Relaxed),
            self.background_counts[2].load(Ordering::Relaxed),
        ]
    }

    pub async fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime_secs: self.start_time.elapsed().as_secs(),
            requests: self.requests.load(Ordering::Relaxed),
            renders: self.renders_total.load(Ordering::Relaxed),
            render_errors: self.render_errors.load(Ordering::Relaxed),
            backgrounds: self.background_counts(),
            render: self.render_times.read().await.snapshot(),
            asset_load: self.asset_load_times.read().await.snapshot(),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Timer guard for measuring operation duration.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_render_timing_stats() {
        let metrics = MetricsCollector::new();
        metrics.record_render(2_000).await;
        metrics.record_render(4_000).await;

        let snap = metrics.snapshot().await;
        assert_eq!(snap.renders, 2);
        assert_eq!(snap.render.count, 2);
        assert!((snap.render.avg_ms - 3.0).abs() < 1e-9);
        assert!((snap.render.min_ms - 2.0).abs() < 1e-9);
        assert!((snap.render.max_ms - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_background_counts() {
        let metrics = MetricsCollector::new();
        metrics.record_background(BackgroundVariant::First);
        metrics.record_background(BackgroundVariant::Third);
        metrics.record_background(BackgroundVariant::Third);
        assert_eq!(metrics.background_counts(), [1, 0, 2]);
    }

    #[test]
    fn test_error_counting() {
        let metrics = MetricsCollector::new();
        metrics.record_error(&PreviewError::AssetNotFound("og/og-2.jpg".into()));
        assert_eq!(metrics.render_errors.load(Ordering::Relaxed), 1);
    }
}
