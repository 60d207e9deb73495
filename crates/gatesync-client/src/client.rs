//! Main NextDNS API client implementation.

use crate::api::{DenylistApi, RewritesApi};
use gatesync_core::{GateError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The NextDNS API base URL
const DEFAULT_BASE_URL: &str = "https://api.nextdns.io";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main NextDNS API client, scoped to one profile
#[derive(Clone)]
pub struct NextDnsClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    profile: String,
    base_url: String,
}

impl NextDnsClient {
    /// Create a new client for the given profile using default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>, profile: impl Into<String>) -> Self {
        NextDnsClientBuilder::new(api_key, profile).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        api_key: impl Into<String>,
        profile: impl Into<String>,
    ) -> NextDnsClientBuilder {
        NextDnsClientBuilder::new(api_key, profile)
    }

    /// The profile this client is scoped to
    #[must_use]
    pub fn profile(&self) -> &str {
        &self.inner.profile
    }

    /// Access denylist endpoints
    #[must_use]
    pub fn denylist(&self) -> DenylistApi<'_> {
        DenylistApi::new(self)
    }

    /// Access rewrite endpoints
    #[must_use]
    pub fn rewrites(&self) -> RewritesApi<'_> {
        RewritesApi::new(self)
    }

    /// Perform a GET request against a profile-relative path
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.profile_url(path);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .header("X-Api-Key", &self.inner.api_key)
            .send()
            .await
            .map_err(|e| GateError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with a JSON body, discarding the response body
    pub(crate) async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.profile_url(path);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .header("X-Api-Key", &self.inner.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GateError::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// Perform a DELETE request
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.profile_url(path);
        debug!(url = %url, "DELETE request");

        let response = self
            .inner
            .http
            .delete(&url)
            .header("X-Api-Key", &self.inner.api_key)
            .send()
            .await
            .map_err(|e| GateError::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// Build a URL under `/profiles/{profile}`
    fn profile_url(&self, path: &str) -> String {
        format!(
            "{}/profiles/{}{}",
            self.inner.base_url, self.inner.profile, path
        )
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| GateError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(GateError::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Handle an API response that returns no useful body
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a `GateError`
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let body = response.text().await.unwrap_or_default();

        // NextDNS reports either {"error": "..."} or {"errors": [{"code": "..."}]}
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.as_str())
                    .map(String::from)
                    .or_else(|| {
                        v.get("errors").and_then(|errs| {
                            let codes: Vec<&str> = errs
                                .as_array()?
                                .iter()
                                .filter_map(|e| e.get("code").and_then(|c| c.as_str()))
                                .collect();
                            (!codes.is_empty()).then(|| codes.join(", "))
                        })
                    })
            })
            .unwrap_or(body);

        match status {
            401 | 403 => Err(GateError::Unauthorized),
            404 => Err(GateError::NotFound { resource: message }),
            429 => {
                warn!("Rate limited by NextDNS API");
                Err(GateError::RateLimited { retry_after })
            }
            _ => Err(GateError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`NextDnsClient`]
pub struct NextDnsClientBuilder {
    api_key: String,
    profile: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl NextDnsClientBuilder {
    /// Create a new builder with the given API key and profile id
    #[must_use]
    pub fn new(api_key: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            profile: profile.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("gatesync/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> NextDnsClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        NextDnsClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                profile: self.profile,
                base_url: self.base_url,
            }),
        }
    }
}
