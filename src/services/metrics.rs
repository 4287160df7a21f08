//! Metrics service for request/reveal accounting

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

pub struct MetricsService {
    words_revealed: AtomicUsize,
    requests_processed: AtomicUsize,
    total_latency_ms: AtomicU64,
    start_time: Instant,
}

impl MetricsService {
    pub fn new() -> Self {
        Self {
            words_revealed: AtomicUsize::new(0),
            requests_processed: AtomicUsize::new(0),
            total_latency_ms: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_words(&self, count: usize) {
        self.words_revealed.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_request(&self, latency_ms: u64) {
        self.requests_processed.fetch_add(1, Ordering::Relaxed);
        self.total_latency_ms.fetch_add(latency_ms, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> MetricsStats {
        let words = self.words_revealed.load(Ordering::Relaxed);
        let requests = self.requests_processed.load(Ordering::Relaxed);
        let total_latency = self.total_latency_ms.load(Ordering::Relaxed);

        MetricsStats {
            words_revealed: words,
            requests_processed: requests,
            avg_latency_ms: if requests > 0 {
                total_latency / requests as u64
            } else {
                0
            },
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsStats {
    pub words_revealed: usize,
    pub requests_processed: usize,
    pub avg_latency_ms: u64,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_recorded_requests() {
        let metrics = MetricsService::new();
        metrics.record_request(10);
        metrics.record_request(30);
        metrics.record_words(7);

        let stats = metrics.get_stats();
        assert_eq!(stats.requests_processed, 2);
        assert_eq!(stats.avg_latency_ms, 20);
        assert_eq!(stats.words_revealed, 7);
    }
}
