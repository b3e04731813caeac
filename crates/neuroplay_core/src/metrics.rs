//! Session counters and structured logging setup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Training steps between periodic info-level summaries.
pub const SUMMARY_INTERVAL: u64 = 1000;

/// Counters for the four independently-driven loops of a session.
pub struct Metrics {
    training_steps: AtomicU64,
    hebbian_ticks: AtomicU64,
    aging_ticks: AtomicU64,
    animation_frames: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            training_steps: AtomicU64::new(0),
            hebbian_ticks: AtomicU64::new(0),
            aging_ticks: AtomicU64::new(0),
            animation_frames: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records `samples` single-sample training steps.
    pub fn record_training(&self, samples: usize, train_loss: f64) {
        let before = self
            .training_steps
            .fetch_add(samples as u64, Ordering::Relaxed);
        let after = before + samples as u64;

        // Log once each time the counter crosses an interval boundary
        if after / SUMMARY_INTERVAL > before / SUMMARY_INTERVAL {
            tracing::info!(
                steps = after,
                train_loss,
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Training progress"
            );
        }
    }

    pub fn record_hebbian_tick(&self) {
        self.hebbian_ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_aging_tick(&self) {
        self.aging_ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_animation_frame(&self) {
        self.animation_frames.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn training_steps(&self) -> u64 {
        self.training_steps.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn hebbian_ticks(&self) -> u64 {
        self.hebbian_ticks.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn aging_ticks(&self) -> u64 {
        self.aging_ticks.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn animation_frames(&self) -> u64 {
        self.animation_frames.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
