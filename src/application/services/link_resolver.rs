//! Short link lookup.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::domain::ResolveOutcome;
use crate::error::ClientError;
use crate::infrastructure::http::ShortenerApi;

/// Looks up where a short link points, using the fetch endpoint.
pub struct LinkResolver<A: ShortenerApi> {
    api: Arc<A>,
    fetch_prefix: String,
}

impl<A: ShortenerApi> LinkResolver<A> {
    pub fn new(config: &ClientConfig, api: Arc<A>) -> Self {
        Self {
            api,
            fetch_prefix: config.fetch_prefix.clone(),
        }
    }

    /// Accepts a bare code or a full short URL and returns the code.
    ///
    /// A full short URL is recognised by the configured fetch prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EmptyCode`] if nothing is left after stripping the prefix.
    pub fn extract_code<'a>(&self, input: &'a str) -> Result<&'a str, ClientError> {
        let code = input.strip_prefix(&self.fetch_prefix).unwrap_or(input);
        if code.is_empty() {
            return Err(ClientError::EmptyCode);
        }
        Ok(code)
    }

    /// Resolves a short code or short URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EmptyCode`] without sending anything for empty input,
    /// otherwise whatever the transport reports.
    pub async fn resolve(&self, input: &str) -> Result<ResolveOutcome, ClientError> {
        let code = self.extract_code(input)?;
        self.api.resolve(code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::MockShortenerApi;

    fn resolver(api: MockShortenerApi) -> LinkResolver<MockShortenerApi> {
        let config = ClientConfig {
            app_url: "https://fn.example.net/shorten".to_string(),
            fetch_prefix: "https://short.example/?s=".to_string(),
            timeout_secs: 30,
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        };
        LinkResolver::new(&config, Arc::new(api))
    }

    #[test]
    fn test_extract_code() {
        let resolver = resolver(MockShortenerApi::new());

        assert_eq!(resolver.extract_code("abc123").unwrap(), "abc123");
        assert_eq!(
            resolver
                .extract_code("https://short.example/?s=abc123")
                .unwrap(),
            "abc123"
        );
        assert!(matches!(
            resolver.extract_code(""),
            Err(ClientError::EmptyCode)
        ));
        assert!(matches!(
            resolver.extract_code("https://short.example/?s="),
            Err(ClientError::EmptyCode)
        ));
    }

    #[tokio::test]
    async fn test_resolve_strips_prefix_before_lookup() {
        let mut api = MockShortenerApi::new();
        api.expect_resolve()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| {
                Ok(ResolveOutcome::Redirect {
                    status: 302,
                    location: "https://example.com".to_string(),
                })
            });

        let outcome = resolver(api)
            .resolve("https://short.example/?s=abc123")
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ResolveOutcome::Redirect {
                status: 302,
                location: "https://example.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_empty_input_sends_nothing() {
        let mut api = MockShortenerApi::new();
        api.expect_resolve().times(0);

        let result = resolver(api).resolve("").await;
        assert!(matches!(result, Err(ClientError::EmptyCode)));
    }
}
