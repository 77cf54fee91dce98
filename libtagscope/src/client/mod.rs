//! HTTP transport for registry communication.
//!
//! This module defines the [`Transport`] capability the resolver performs its
//! GET through, and [`Client`], a thin implementation of it built on reqwest.
//! Timeouts, TLS and connection pooling live here; nothing above this layer
//! retries or reconfigures the transport.

use crate::error::{Result, TagscopeError};
use reqwest::Client as ReqwestClient;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;


/// A fully read HTTP response.
///
/// The body has been drained and the underlying connection handed back to
/// the transport by the time this value exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Final URL after redirects
    pub url: String,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP GET capability used by the resolver.
///
/// Implementations own timeouts and cancellation: dropping the returned
/// future must abandon the request. Shared use across tasks goes through
/// `&self`, so implementations must be safe to call concurrently.
pub trait Transport: Send + Sync {
    /// Performs a GET against `url` and reads the whole body.
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse>> + Send {
        (**self).get(url)
    }
}

/// Configuration for the HTTP client.
///
/// # Examples
///
/// ```
/// use libtagscope::client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(60)
///     .with_max_idle_per_host(20);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
    /// Maximum idle connections per host (default: 10)
    pub max_idle_per_host: usize,
    /// Accept invalid TLS certificates (default: false)
    pub insecure: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            max_idle_per_host: 10,
            insecure: false,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::client::ClientConfig;
    ///
    /// let config = ClientConfig::new();
    /// assert_eq!(config.timeout_seconds, 30);
    /// assert_eq!(config.max_idle_per_host, 10);
    /// assert!(!config.insecure);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the maximum idle connections per host.
    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    /// Accepts invalid TLS certificates when set.
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }
}

/// HTTP client for registry requests.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http_client: ReqwestClient,
    /// Timeout applied to every request, kept for error messages
    timeout: Duration,
}

impl Client {
    /// Creates a client with default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::client::Client;
    ///
    /// let client = Client::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagscope::client::{Client, ClientConfig};
    ///
    /// let config = ClientConfig::new().with_timeout(5);
    /// let client = Client::with_config(config).unwrap();
    /// assert_eq!(client.timeout().as_secs(), 5);
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds);

        let http_client = ReqwestClient::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .danger_accept_invalid_certs(config.insecure)
            .user_agent(concat!("tagscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TagscopeError::transport_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            timeout,
        })
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Translates a reqwest error into a TagscopeError.
    fn translate_reqwest_error(&self, error: reqwest::Error, url: &Url) -> TagscopeError {
        if error.is_timeout() {
            TagscopeError::transport_with_source(
                format!(
                    "Request to {} timed out after {} seconds",
                    url,
                    self.timeout.as_secs()
                ),
                error,
            )
        } else if error.is_connect() {
            TagscopeError::transport_with_source(
                format!("Failed to connect to registry at {}", url),
                error,
            )
        } else if error.is_body() || error.is_decode() {
            TagscopeError::transport_with_source(
                format!("Failed to read response body from {}", url),
                error,
            )
        } else if error.is_request() {
            TagscopeError::transport_with_source(format!("Failed to send request to {}", url), error)
        } else {
            TagscopeError::transport_with_source(
                format!("Network error communicating with {}", url),
                error,
            )
        }
    }
}

impl Transport for Client {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        debug!(%url, "sending GET");

        let response = self
            .http_client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.translate_reqwest_error(e, url))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();

        // Consumes the response, releasing the connection on success and error alike.
        let body = response
            .bytes()
            .await
            .map_err(|e| self.translate_reqwest_error(e, url))?;

        debug!(%url, status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            url: final_url,
            body: body.to_vec(),
        })
    }
}
