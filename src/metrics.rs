//! Routing metrics.
//!
//! Counters for chain lookups and catalog reloads. One instance lives in the
//! server state; counters use relaxed atomics since they are only reported.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct RouteMetrics {
    /// Chain lookups served
    lookups: AtomicUsize,

    /// Lookups that found no chain
    unrouted: AtomicUsize,

    /// Successful catalog reloads
    reloads: AtomicUsize,

    /// Reloads rejected because the new configuration did not build
    reload_failures: AtomicUsize,
}

impl RouteMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a chain lookup and whether it found a route.
    pub fn record_lookup(&self, routed: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if !routed {
            self.unrouted.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_reload(&self) {
        self.reloads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reload_failure(&self) {
        self.reload_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let unrouted = self.unrouted.load(Ordering::Relaxed);
        let routed_rate = if lookups > 0 {
            ((lookups - unrouted) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            unrouted,
            routed_rate,
            reloads: self.reloads.load(Ordering::Relaxed),
            reload_failures: self.reload_failures.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of the routing counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub unrouted: usize,

    /// Share of lookups that found a chain, as a percentage (0-100)
    pub routed_rate: f64,

    pub reloads: usize,
    pub reload_failures: usize,
}
