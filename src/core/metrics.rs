//! Dispatch metrics for observability
//!
//! Counters describing what happened to emitted events, mainly useful to
//! notice destinations that keep failing without raising to callers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Dispatch counters
///
/// # Example
///
/// ```
/// use swiftwood::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
/// metrics.record_emitted();
/// metrics.record_delivered();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.delivered_count(), 1);
/// ```
#[derive(Debug)]
pub struct DispatchMetrics {
    /// Events constructed by the logger
    emitted: AtomicU64,

    /// Successful `accept` calls across all destinations
    delivered: AtomicU64,

    /// Gate rejections (level or category) across all destinations
    filtered: AtomicU64,

    /// `accept` calls that returned an error or panicked
    failed: AtomicU64,
}

impl DispatchMetrics {
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed deliveries as a percentage (0.0 - 100.0) of attempted ones
    ///
    /// Returns 0.0 if nothing has been delivered yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count();
        let attempted = failed + self.delivered_count();

        if attempted == 0 {
            0.0
        } else {
            (failed as f64 / attempted as f64) * 100.0
        }
    }

    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}
