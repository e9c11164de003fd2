//! Administrative console for the library management system.
//!
//! The console resolves navigation targets against a static route tree and
//! talks to the library backend through a single gateway that unwraps
//! payloads and reports every failure exactly once.

pub mod api;
pub mod config;
pub mod gateway;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod views;

pub use api::LibraryApi;
pub use config::ConsoleConfig;
pub use gateway::{Gateway, GatewayConfig, RequestError};
pub use lifecycle::App;
pub use routing::RouteTable;
