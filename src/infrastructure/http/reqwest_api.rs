//! `reqwest`-backed implementation of [`ShortenerApi`].

use super::api::ShortenerApi;
use crate::config::ClientConfig;
use crate::domain::{ResolveOutcome, ShortenOutcome, ShortenRequest};
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, LOCATION};
use reqwest::{Client, redirect};
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the deployed shorten and fetch endpoints.
///
/// Redirects are never followed: a 3xx from the fetch endpoint is the
/// answer being looked for, and a 3xx from the shorten endpoint is reported
/// like any other non-200 status.
pub struct ReqwestShortenerApi {
    client: Client,
    app_url: Url,
    fetch_prefix: String,
}

impl ReqwestShortenerApi {
    /// Builds the client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] if `app_url` does not parse and
    /// [`ClientError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let app_url = Url::parse(&config.app_url).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: config.app_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(redirect::Policy::none())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            app_url,
            fetch_prefix: config.fetch_prefix.clone(),
        })
    }

    fn shorten_url(&self, request: &ShortenRequest) -> Url {
        let mut url = self.app_url.clone();
        url.set_query(Some(&request.query_string()));
        url
    }

    fn resolve_url(&self, code: &str) -> Result<Url, ClientError> {
        let encoded: String = url::form_urlencoded::byte_serialize(code.as_bytes()).collect();
        let raw = format!("{}{}", self.fetch_prefix, encoded);
        Url::parse(&raw).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: raw,
            reason: e.to_string(),
        })
    }
}

fn credential_headers(request: &ShortenRequest) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    for &(name, ref value) in &request.headers {
        let value = HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader(name))?;
        headers.insert(HeaderName::from_static(name), value);
    }
    Ok(headers)
}

#[async_trait]
impl ShortenerApi for ReqwestShortenerApi {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenOutcome, ClientError> {
        let headers = credential_headers(request)?;
        let url = self.shorten_url(request);

        info!("Sending shorten request to {}", self.app_url);
        debug!(?request, "Shorten request");

        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .inspect_err(|e| warn!("Shorten request failed: {}", e))?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if status == crate::domain::outcome::STATUS_OK {
            info!(status, "Short link created");
        } else {
            warn!(status, "Shorten endpoint returned an error");
        }

        Ok(ShortenOutcome { status, body })
    }

    async fn resolve(&self, code: &str) -> Result<ResolveOutcome, ClientError> {
        let url = self.resolve_url(code)?;

        info!("Resolving short code '{}'", code);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| warn!("Resolve request failed: {}", e))?;

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        match location {
            Some(location) if status.is_redirection() => {
                debug!(status = status.as_u16(), %location, "Short code resolved");
                Ok(ResolveOutcome::Redirect {
                    status: status.as_u16(),
                    location,
                })
            }
            _ => {
                let body = response.text().await?;
                warn!(status = status.as_u16(), "Fetch endpoint did not redirect");
                Ok(ResolveOutcome::Failed {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
