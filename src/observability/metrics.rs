//! Request metrics.
//!
//! # Metrics
//! - `console_requests_total` (counter): calls by method and outcome
//! - `console_request_duration_seconds` (histogram): latency by method
//! - `console_notifications_total` (counter): failures reported to the user
//!
//! No recorder is installed by the binary; an embedding application may
//! install one to collect these.

use std::time::Duration;

/// Record a finished backend call.
pub fn record_request(method: &str, outcome: &'static str, elapsed: Duration) {
    metrics::counter!(
        "console_requests_total",
        "method" => method.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!(
        "console_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(elapsed.as_secs_f64());
}

/// Record a notification shown to the user.
pub fn record_notification() {
    metrics::counter!("console_notifications_total").increment(1);
}
