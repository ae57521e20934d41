//! Chat outcome counters for the status endpoint

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// How a single chat invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    Replied,
    EmptyReply,
    Unconfigured,
    ProviderFailure,
}

pub struct MetricsService {
    requests: AtomicU64,
    replies: AtomicU64,
    empty_replies: AtomicU64,
    unconfigured: AtomicU64,
    provider_failures: AtomicU64,
    total_latency_ms: AtomicU64,
    start_time: Instant,
}

impl MetricsService {
    pub fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
            replies: AtomicU64::new(0),
            empty_replies: AtomicU64::new(0),
            unconfigured: AtomicU64::new(0),
            provider_failures: AtomicU64::new(0),
            total_latency_ms: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record(&self, outcome: ChatOutcome, latency_ms: u64) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.total_latency_ms.fetch_add(latency_ms, Ordering::Relaxed);
        let counter = match outcome {
            ChatOutcome::Replied => &self.replies,
            ChatOutcome::EmptyReply => &self.empty_replies,
            ChatOutcome::Unconfigured => &self.unconfigured,
            ChatOutcome::ProviderFailure => &self.provider_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn get_stats(&self) -> MetricsStats {
        let requests = self.requests.load(Ordering::Relaxed);
        let total_latency = self.total_latency_ms.load(Ordering::Relaxed);

        MetricsStats {
            requests,
            replies: self.replies.load(Ordering::Relaxed),
            empty_replies: self.empty_replies.load(Ordering::Relaxed),
            unconfigured: self.unconfigured.load(Ordering::Relaxed),
            provider_failures: self.provider_failures.load(Ordering::Relaxed),
            avg_latency_ms: if requests > 0 { total_latency / requests } else { 0 },
        }
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsStats {
    pub requests: u64,
    pub replies: u64,
    pub empty_replies: u64,
    pub unconfigured: u64,
    pub provider_failures: u64,
    pub avg_latency_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_are_counted() {
        let metrics = MetricsService::new();
        metrics.record(ChatOutcome::Replied, 100);
        metrics.record(ChatOutcome::ProviderFailure, 300);
        metrics.record(ChatOutcome::Unconfigured, 2);

        let stats = metrics.get_stats();
        assert_eq!(stats.requests, 3);
        assert_eq!(stats.replies, 1);
        assert_eq!(stats.provider_failures, 1);
        assert_eq!(stats.unconfigured, 1);
        assert_eq!(stats.empty_replies, 0);
        assert_eq!(stats.avg_latency_ms, 134);
    }

    #[test]
    fn test_empty_stats() {
        assert_eq!(MetricsService::new().get_stats().avg_latency_ms, 0);
    }
}
