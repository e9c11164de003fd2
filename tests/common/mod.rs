//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use library_console::config::ConsoleConfig;
use library_console::gateway::{ChannelNotifier, Gateway, GatewayConfig, Notification};
use library_console::App;
use tokio::net::TcpListener;
use tokio::sync::mpsc::UnboundedReceiver;

/// Serve `app` on an ephemeral loopback port.
pub async fn start_backend(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// A gateway pointed at `addr`, plus the receiver its notifications land on.
#[allow(dead_code)]
pub fn gateway_for(
    addr: SocketAddr,
    timeout: Duration,
) -> (Gateway, UnboundedReceiver<Notification>) {
    let (notifier, rx) = ChannelNotifier::new();
    let config = GatewayConfig::new(&format!("http://{}", addr), timeout).unwrap();
    (Gateway::new(config, Arc::new(notifier)).unwrap(), rx)
}

/// A bootstrapped console pointed at `addr`.
#[allow(dead_code)]
pub fn app_for(addr: SocketAddr) -> (App, UnboundedReceiver<Notification>) {
    let mut config = ConsoleConfig::default();
    config.backend.base_url = format!("http://{}", addr);
    config.backend.timeout_ms = 2000;

    let (notifier, rx) = ChannelNotifier::new();
    (App::bootstrap(&config, Arc::new(notifier)).unwrap(), rx)
}

/// Everything notified so far.
#[allow(dead_code)]
pub fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut seen = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        seen.push(notification);
    }
    seen
}
