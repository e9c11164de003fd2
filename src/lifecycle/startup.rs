//! Application bootstrap.
//!
//! # Responsibilities
//! - Build the gateway from validated configuration
//! - Compile the route table
//! - Serve navigations: resolve, load layouts and page, render
//!
//! # Design Decisions
//! - Ordered startup: config first, then gateway, then routes
//! - Everything is built once; nothing is mutated after startup
//! - The notifier is injected, so embedding code and tests choose where
//!   notifications go

use std::sync::Arc;

use thiserror::Error;

use crate::api::LibraryApi;
use crate::config::{ConfigError, ConsoleConfig};
use crate::gateway::{Gateway, GatewayBuildError, GatewayConfig, Notifier, RequestError};
use crate::routing::{library_table, RouteTable, RouteTableError, RoutingError};
use crate::views::Screen;

/// Errors that stop the console from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayBuildError),

    #[error("route table error: {0}")]
    Routes(#[from] RouteTableError),
}

/// Errors from a single navigation.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    NotFound(#[from] RoutingError),

    /// Already shown to the user by the gateway.
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// A mounted page: the resolved route and what it rendered.
#[derive(Debug)]
pub struct Mounted {
    pub route: String,
    pub path: String,
    /// Layout screens first, the page's own screen last.
    pub screens: Vec<Screen>,
}

/// The running console.
#[derive(Debug)]
pub struct App {
    api: LibraryApi,
    routes: RouteTable,
}

impl App {
    /// Start the console from validated configuration.
    pub fn bootstrap(
        config: &ConsoleConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StartupError> {
        let gateway_config = GatewayConfig::from_backend(&config.backend)?;
        let gateway = Gateway::new(gateway_config, notifier)?;
        let routes = library_table()?;

        tracing::info!(
            base_url = %config.backend.base_url,
            timeout_ms = config.backend.timeout_ms,
            routes = routes.routes().len(),
            "Console ready"
        );

        Ok(Self::new(LibraryApi::new(gateway), routes))
    }

    /// Assemble from already-built parts.
    pub fn new(api: LibraryApi, routes: RouteTable) -> Self {
        Self { api, routes }
    }

    pub fn api(&self) -> &LibraryApi {
        &self.api
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Navigate to `path` and render what it shows.
    pub async fn navigate(&self, path: &str) -> Result<Mounted, NavigationError> {
        let resolution = self.routes.resolve(path)?;

        let mut screens = Vec::with_capacity(resolution.layouts.len() + 1);
        for layout in &resolution.layouts {
            screens.push(layout.load(&self.api).await?);
        }
        screens.push(resolution.view.load(&self.api).await?);

        Ok(Mounted {
            route: resolution.name,
            path: resolution.path,
            screens,
        })
    }
}
