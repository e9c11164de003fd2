//! Shared backend client.
//!
//! # Responsibilities
//! - Hold the one immutable client configuration (base origin, timeout)
//! - Issue every backend call through the same pipeline
//! - Normalize success into the bare payload
//! - Normalize failure into a [`RequestError`], notify once, return it
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities; a timed-out call is abandoned
//! - No retries: every failure is reported and handed back
//! - Cheap to clone; clones share the configuration and connection pool

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::time::timeout;
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::config::BackendConfig;
use crate::gateway::envelope;
use crate::gateway::error::{FailureCause, RequestError};
use crate::gateway::notify::{Notification, Notifier};
use crate::observability::metrics;

/// Header carrying the per-call correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Errors raised while constructing a gateway.
#[derive(Debug, Error)]
pub enum GatewayBuildError {
    #[error("invalid base origin '{value}': {source}")]
    InvalidOrigin {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base origin '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Immutable client configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    base_origin: Url,
    timeout: Duration,
    use_system_proxy: bool,
}

impl GatewayConfig {
    /// Create a configuration for the given origin and timeout.
    pub fn new(base_origin: &str, timeout: Duration) -> Result<Self, GatewayBuildError> {
        let url = Url::parse(base_origin).map_err(|source| GatewayBuildError::InvalidOrigin {
            value: base_origin.to_string(),
            source,
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(GatewayBuildError::UnsupportedScheme(base_origin.to_string()));
        }
        if timeout.is_zero() {
            return Err(GatewayBuildError::ZeroTimeout);
        }

        Ok(Self {
            base_origin: url,
            timeout,
            use_system_proxy: false,
        })
    }

    /// Build from the `[backend]` config section.
    pub fn from_backend(config: &BackendConfig) -> Result<Self, GatewayBuildError> {
        Ok(Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))?
            .with_system_proxy(config.use_system_proxy))
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.use_system_proxy = enabled;
        self
    }

    pub fn base_origin(&self) -> &Url {
        &self.base_origin
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join a request path onto the base origin.
    ///
    /// Any path prefix on the origin is kept, so an origin of
    /// `http://host/api` and a path of `/readers/` give `http://host/api/readers/`.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.base_origin.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{}/{}", base, path))
    }
}

/// The single entry point for backend calls.
#[derive(Clone)]
pub struct Gateway {
    client: reqwest::Client,
    config: Arc<GatewayConfig>,
    notifier: Arc<dyn Notifier>,
}

impl Gateway {
    /// Create a gateway that reports failures through `notifier`.
    pub fn new(
        config: GatewayConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, GatewayBuildError> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        tracing::debug!(
            base_origin = %config.base_origin,
            timeout_ms = config.timeout.as_millis() as u64,
            "Gateway initialized"
        );

        Ok(Self {
            client,
            config: Arc::new(config),
            notifier,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Issue a call and return the unwrapped payload.
    ///
    /// On failure the user is notified once and the error is returned.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, RequestError> {
        self.dispatch(method, path, body)
            .await
            .map_err(|e| self.report(e))
    }

    /// Issue a call and decode the payload into `T`.
    ///
    /// A payload that does not decode counts as a failed call.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let outcome = async {
            let body = body
                .map(serde_json::to_value)
                .transpose()
                .map_err(|e| RequestError::from_cause(FailureCause::Encode(e)))?;
            let payload = self.dispatch(method, path, body.as_ref()).await?;
            serde_json::from_value(payload)
                .map_err(|e| RequestError::from_cause(FailureCause::Decode(e)))
        }
        .await;

        outcome.map_err(|e| self.report(e))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request::<T, Value>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request::<T, Value>(Method::POST, path, None).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request::<T, Value>(Method::DELETE, path, None).await
    }

    /// Refuse an operation on the client side.
    ///
    /// The refusal is reported exactly like a backend failure.
    pub fn reject(&self, message: impl Into<String>) -> RequestError {
        self.report(RequestError::new(message, FailureCause::Rejected))
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, RequestError> {
        let url = self
            .config
            .endpoint(path)
            .map_err(|_| RequestError::from_cause(FailureCause::InvalidPath(path.to_string())))?;

        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "backend_call",
            method = %method,
            path = %path,
            request_id = %request_id
        );

        async move {
            let started = Instant::now();

            let mut builder = self
                .client
                .request(method.clone(), url)
                .header(X_REQUEST_ID, request_id.to_string());
            if let Some(body) = body {
                builder = builder.json(body);
            }

            let exchange = async {
                let response = builder.send().await?;
                let status = response.status();
                let bytes = response.bytes().await?;
                Ok::<_, reqwest::Error>((status, bytes))
            };

            let outcome = match timeout(self.config.timeout, exchange).await {
                Ok(Ok((status, bytes))) if status.is_success() => {
                    tracing::debug!(status = status.as_u16(), "Backend call succeeded");
                    Ok(envelope::unwrap_payload(&bytes))
                }
                Ok(Ok((status, bytes))) => Err(FailureCause::Status {
                    status: status.as_u16(),
                    body: envelope::error_body(&bytes),
                }),
                Ok(Err(e)) => Err(FailureCause::Transport(e)),
                Err(_) => Err(FailureCause::Timeout(self.config.timeout)),
            };

            let label = if outcome.is_ok() { "success" } else { "failure" };
            metrics::record_request(method.as_str(), label, started.elapsed());

            outcome.map_err(RequestError::from_cause)
        }
        .instrument(span)
        .await
    }

    fn report(&self, error: RequestError) -> RequestError {
        tracing::warn!(
            error = %error.message(),
            cause = %error.original_cause(),
            "Backend call failed"
        );
        metrics::record_notification();
        self.notifier.notify(Notification::error(error.message()));
        error
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_origin", &self.config.base_origin.as_str())
            .field("timeout_ms", &self.config.timeout.as_millis())
            .field("notifier", &self.notifier)
            .finish()
    }
}
