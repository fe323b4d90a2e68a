//! Server metrics collection and reporting

use crate::support::ResponseSource;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

const MAX_RESPONSE_TIMES: usize = 1000;

#[derive(Clone)]
pub struct MetricsCollector {
    pub total_requests: Arc<AtomicU64>,
    pub successful_requests: Arc<AtomicU64>,
    pub failed_requests: Arc<AtomicU64>,
    pub requests_by_endpoint: Arc<RwLock<HashMap<String, u64>>>,
    pub response_times: Arc<RwLock<Vec<ResponseTime>>>,
    pub replies: Arc<ReplyCounters>,
    pub start_time: DateTime<Utc>,
}

/// Outcome counts for curhat submissions.
#[derive(Default)]
pub struct ReplyCounters {
    pub generated: AtomicU64,
    pub defaulted: AtomicU64,
    pub fallback: AtomicU64,
    pub ignored: AtomicU64,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ResponseTime {
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u128,
    pub endpoint: String,
    pub status: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplySnapshot {
    pub generated: u64,
    pub defaulted: u64,
    pub fallback: u64,
    pub ignored: u64,
}

#[derive(Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub requests_by_endpoint: Vec<EndpointMetric>,
    pub average_response_time_ms: f64,
    pub uptime_seconds: i64,
    pub error_rate: f64,
    pub replies: ReplySnapshot,
}

#[derive(Serialize, Deserialize)]
pub struct EndpointMetric {
    pub endpoint: String,
    pub count: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            total_requests: Arc::new(AtomicU64::new(0)),
            successful_requests: Arc::new(AtomicU64::new(0)),
            failed_requests: Arc::new(AtomicU64::new(0)),
            requests_by_endpoint: Arc::new(RwLock::new(HashMap::new())),
            response_times: Arc::new(RwLock::new(Vec::new())),
            replies: Arc::new(ReplyCounters::default()),
            start_time: Utc::now(),
        }
    }

    pub fn record_request(&self, endpoint: &str) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);

        let mut endpoints = self.requests_by_endpoint.write();
        *endpoints.entry(endpoint.to_string()).or_insert(0) += 1;
    }

    pub fn record_response(&self, endpoint: &str, duration_ms: u128, status: u16) {
        if status < 400 {
            self.successful_requests.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }

        let mut times = self.response_times.write();
        times.push(ResponseTime {
            timestamp: Utc::now(),
            duration_ms,
            endpoint: endpoint.to_string(),
            status,
        });

        if times.len() > MAX_RESPONSE_TIMES {
            let drain_end = times.len() - MAX_RESPONSE_TIMES;
            times.drain(0..drain_end);
        }
    }

    pub fn record_reply(&self, source: ResponseSource) {
        let counter = match source {
            ResponseSource::Generated => &self.replies.generated,
            ResponseSource::Default => &self.replies.defaulted,
            ResponseSource::Fallback => &self.replies.fallback,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ignored_submission(&self) {
        self.replies.ignored.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        let total = self.total_requests.load(Ordering::Relaxed);
        let successful = self.successful_requests.load(Ordering::Relaxed);
        let failed = self.failed_requests.load(Ordering::Relaxed);

        let uptime_seconds = Utc::now()
            .signed_duration_since(self.start_time)
            .num_seconds()
            .max(1);

        let mut endpoint_metrics: Vec<EndpointMetric> = self
            .requests_by_endpoint
            .read()
            .iter()
            .map(|(endpoint, count)| EndpointMetric {
                endpoint: endpoint.clone(),
                count: *count,
            })
            .collect();
        endpoint_metrics.sort_by(|a, b| b.count.cmp(&a.count));

        let one_hour_ago = Utc::now() - chrono::Duration::hours(1);
        let times = self.response_times.read();
        let recent: Vec<&ResponseTime> = times.iter().filter(|t| t.timestamp > one_hour_ago).collect();
        let average_response_time_ms = if recent.is_empty() {
            0.0
        } else {
            recent.iter().map(|t| t.duration_ms as f64).sum::<f64>() / recent.len() as f64
        };

        MetricsSnapshot {
            total_requests: total,
            successful_requests: successful,
            failed_requests: failed,
            requests_by_endpoint: endpoint_metrics,
            average_response_time_ms,
            uptime_seconds,
            error_rate: if total > 0 {
                (failed as f64 / total as f64) * 100.0
            } else {
                0.0
            },
            replies: ReplySnapshot {
                generated: self.replies.generated.load(Ordering::Relaxed),
                defaulted: self.replies.defaulted.load(Ordering::Relaxed),
                fallback: self.replies.fallback.load(Ordering::Relaxed),
                ignored: self.replies.ignored.load(Ordering::Relaxed),
            },
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_counters() {
        let metrics = MetricsCollector::new();
        metrics.record_request("/curhat");
        metrics.record_request("/curhat");
        metrics.record_request("/");
        metrics.record_response("/curhat", 120, 200);
        metrics.record_response("/curhat", 80, 200);
        metrics.record_response("/", 5, 404);

        let snapshot = metrics.get_snapshot();
        assert_eq!(snapshot.total_requests, 3);
        assert_eq!(snapshot.successful_requests, 2);
        assert_eq!(snapshot.failed_requests, 1);
        assert_eq!(snapshot.requests_by_endpoint[0].endpoint, "/curhat");
        assert_eq!(snapshot.requests_by_endpoint[0].count, 2);
        assert!((snapshot.average_response_time_ms - 205.0 / 3.0).abs() < f64::EPSILON * 100.0);
    }

    #[test]
    fn test_reply_counters() {
        let metrics = MetricsCollector::new();
        metrics.record_reply(ResponseSource::Generated);
        metrics.record_reply(ResponseSource::Generated);
        metrics.record_reply(ResponseSource::Fallback);
        metrics.record_ignored_submission();

        assert_eq!(
            metrics.get_snapshot().replies,
            ReplySnapshot {
                generated: 2,
                defaulted: 0,
                fallback: 1,
                ignored: 1,
            }
        );
    }

    #[test]
    fn test_response_times_are_bounded() {
        let metrics = MetricsCollector::new();
        for _ in 0..(MAX_RESPONSE_TIMES + 50) {
            metrics.record_response("/", 1, 200);
        }
        assert_eq!(metrics.response_times.read().len(), MAX_RESPONSE_TIMES);
    }
}
