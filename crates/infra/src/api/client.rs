//! Signed request execution against the NearlyFreeSpeech.NET API
//!
//! One call is one HTTP round trip: normalize the path, sign it together
//! with the body, send, and either return the body text or a single
//! [`ApiError`].

use nfsnapi_core::{AuthHeader, Authenticator};
use nfsnapi_domain::constants::{FORM_CONTENT_TYPE, USER_AGENT};
use nfsnapi_domain::{ApiError, ClientConfig, Credentials, RequestPath, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::{debug, instrument, warn};

use super::errors::map_status_error;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Issues authenticated API requests.
///
/// Holds no credentials and no per-request state, so one runner can be
/// cloned and shared freely across tasks.
#[derive(Debug, Clone)]
pub struct RequestRunner {
    http_client: HttpClient,
    authenticator: Authenticator,
    base_url: String,
}

impl RequestRunner {
    /// Create a runner with the system clock and random salts.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> RequestRunnerBuilder {
        RequestRunnerBuilder::default()
    }

    /// Run a request and return the response body as text.
    ///
    /// `body` selects the method: `None` sends a GET, `Some` sends a POST
    /// whose entity is exactly those bytes, even when empty.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the path is empty, the transport fails, or
    /// the API answers with a non-success status.
    #[instrument(
        skip(self, credentials, body),
        fields(path = %request_path, method = tracing::field::Empty)
    )]
    pub async fn run_request(
        &self,
        credentials: &Credentials,
        request_path: &str,
        body: Option<&[u8]>,
    ) -> Result<String> {
        let path = RequestPath::parse(request_path)?;
        let url = self.url(&path);
        let header = self.authenticator.compute(credentials, &path, body.unwrap_or_default());

        let request = match body {
            None => self.http_client.request(Method::GET, &url),
            Some(bytes) => self
                .http_client
                .request(Method::POST, &url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(bytes.to_vec()),
        }
        .header(AuthHeader::HEADER_NAME, header.value());

        tracing::Span::current().record("method", if body.is_some() { "POST" } else { "GET" });
        debug!(url = %url, "API request");

        let response = self.http_client.send(request).await.map_err(|err| {
            warn!(reason = err.reason(), "API request failed before a response");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let err = map_status_error(status, &body_text);
            warn!(%status, reason = err.reason(), "API returned error status");
            return Err(err);
        }

        let text = response.text().await.map_err(|err| ApiError::from(InfraError::from(err)))?;

        debug!(%status, bytes = text.len(), "API request successful");
        Ok(text)
    }

    /// GET `request_path`.
    ///
    /// # Errors
    ///
    /// See [`run_request`](Self::run_request).
    pub async fn get(&self, credentials: &Credentials, request_path: &str) -> Result<String> {
        self.run_request(credentials, request_path, None).await
    }

    /// POST a form-encoded `body` to `request_path`.
    ///
    /// # Errors
    ///
    /// See [`run_request`](Self::run_request).
    pub async fn post(
        &self,
        credentials: &Credentials,
        request_path: &str,
        body: &str,
    ) -> Result<String> {
        self.run_request(credentials, request_path, Some(body.as_bytes())).await
    }

    fn url(&self, path: &RequestPath) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Builder for [`RequestRunner`]
#[derive(Debug, Default)]
pub struct RequestRunnerBuilder {
    config: Option<ClientConfig>,
    authenticator: Option<Authenticator>,
}

impl RequestRunnerBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the authenticator, e.g. one with a fixed clock and salt.
    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Build the runner
    ///
    /// # Errors
    ///
    /// Returns error if the base URL does not parse or client creation fails
    pub fn build(self) -> Result<RequestRunner> {
        let config = self.config.unwrap_or_default();

        url::Url::parse(&config.base_url)
            .map_err(|e| ApiError::config(format!("invalid base URL {}: {e}", config.base_url)))?;

        let mut http = HttpClient::builder()
            .user_agent(config.user_agent.clone().unwrap_or_else(|| USER_AGENT.to_string()))
            .accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout() {
            http = http.timeout(timeout);
        }
        if !config.use_system_proxy {
            http = http.no_proxy();
        }

        Ok(RequestRunner {
            http_client: http.build()?,
            authenticator: self.authenticator.unwrap_or_default(),
            base_url: config.base_url,
        })
    }
}

/// Run a single request with default settings.
///
/// `request_body` of `None` sends a GET; `Some` sends a POST with the string's
/// UTF-8 bytes, which are also the bytes that get signed.
///
/// # Errors
///
/// Returns an [`ApiError`] on any failure; see [`RequestRunner::run_request`].
pub async fn run_request(
    username: &str,
    api_key: &str,
    request_path: &str,
    request_body: Option<&str>,
) -> Result<String> {
    let runner = RequestRunner::new(ClientConfig::default())?;
    let credentials = Credentials::new(username, api_key);
    runner.run_request(&credentials, request_path, request_body.map(str::as_bytes)).await
}
