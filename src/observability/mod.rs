//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! gateway / routing / views produce:
//!     → logging.rs (structured log events, request-id spans)
//!     → metrics.rs (counters, histograms)
//! ```
//!
//! # Design Decisions
//! - Structured logging for machine parsing
//! - Request ID flows through every gateway call span
//! - Metrics are facade calls; no-ops without a recorder

pub mod logging;
pub mod metrics;
