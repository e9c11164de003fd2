//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build gateway → Compile routes → Serve navigations
//! ```

pub mod startup;

pub use startup::{App, Mounted, NavigationError, StartupError};
