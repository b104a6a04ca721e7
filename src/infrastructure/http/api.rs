//! Shortener API trait.

use crate::domain::{ResolveOutcome, ShortenOutcome, ShortenRequest};
use crate::error::ClientError;
use async_trait::async_trait;

/// Remote endpoints of the shortening service.
///
/// A returned `Ok` means an HTTP response arrived, whatever its status.
/// Status interpretation belongs to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestShortenerApi`] - Real HTTP client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Sends one `GET` to the shorten endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if no response was received and
    /// [`ClientError::InvalidHeader`] if a credential cannot be sent as a header.
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenOutcome, ClientError>;

    /// Looks up a short code on the fetch endpoint without following the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if no response was received and
    /// [`ClientError::InvalidEndpoint`] if the code does not form a valid URL.
    async fn resolve(&self, code: &str) -> Result<ResolveOutcome, ClientError>;
}
