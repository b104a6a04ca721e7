//! # Shortener Form
//!
//! Terminal client for a remote URL shortening service.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as a server would:
//!
//! - **Domain Layer** ([`domain`]) - Form fields, outbound request, response outcomes
//! - **View Layer** ([`view`]) - Explicit view state and a pure render function
//! - **Application Layer** ([`application`]) - Form controller and link resolver
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client and system clipboard
//!
//! ## Features
//!
//! - One `GET` per submission; empty fields are left out of the request
//! - Optional alias, password and password-change inputs behind toggles
//! - Success, server-error and network-error outcomes rendered the same way
//! - Copy of the short URL to the system clipboard
//! - Lookup of where an existing short link points
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_APP_URL="https://fn.example.net/shorten"
//! export SHORTENER_FETCH_PREFIX="https://short.example/?s="
//!
//! # Interactive form
//! cargo run -- form
//!
//! # One-shot
//! cargo run -- shorten --url https://example.com --alias docs
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::ClientConfig`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod view;

pub use config::ClientConfig;
pub use error::ClientError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::Notifier;
    pub use crate::application::services::{CopyOutcome, FormController, LinkResolver};
    pub use crate::config::ClientConfig;
    pub use crate::domain::{FormFields, ResolveOutcome, ShortenOutcome, ShortenRequest};
    pub use crate::error::ClientError;
    pub use crate::infrastructure::clipboard::{Clipboard, SystemClipboard};
    pub use crate::infrastructure::http::{ReqwestShortenerApi, ShortenerApi};
    pub use crate::view::{Display, ElementId, RenderedView, Screen, Toggle, ViewState, render};
}
