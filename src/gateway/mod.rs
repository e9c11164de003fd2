//! Request gateway subsystem.
//!
//! # Data Flow
//! ```text
//! calling code (api::*)
//!     → client.rs (join base origin, attach request ID, send with timeout)
//!     → 2xx: envelope.rs (strip wrapper) → payload
//!     → failure: error.rs (derive message) → notify.rs (one notification)
//!                → Err(RequestError) back to the caller
//! ```
//!
//! # Design Decisions
//! - One normalization policy, applied inside every call rather than as
//!   attachable hooks
//! - The gateway owns error notification; callers never show their own
//!   generic message for the same failure
//! - Configuration is explicit and injected, never looked up globally

pub mod client;
pub mod envelope;
pub mod error;
pub mod notify;

pub use client::{Gateway, GatewayBuildError, GatewayConfig, X_REQUEST_ID};
pub use error::{FailureCause, RequestError, FALLBACK_MESSAGE};
pub use notify::{ChannelNotifier, ConsoleNotifier, Level, Notification, Notifier};
pub use reqwest::Method;
