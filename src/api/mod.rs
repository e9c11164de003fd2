//! Typed access to the library backend.
//!
//! Every method goes through the [`Gateway`], so failures are already
//! notified by the time they reach the caller.

pub mod auth;
pub mod catalog;
pub mod circulation;
pub mod fines;
pub mod models;
pub mod readers;

pub use models::*;

use crate::gateway::Gateway;

/// Backend endpoints grouped behind one handle.
#[derive(Debug, Clone)]
pub struct LibraryApi {
    gateway: Gateway,
}

impl LibraryApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

/// Percent-encode a value for use as one path segment.
pub(crate) fn encode_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
