//! HTTP access to the shortening service.
//!
//! Provides a [`ShortenerApi`] trait with one production implementation:
//! - [`ReqwestShortenerApi`] - `reqwest` client for the deployed endpoints

mod api;
mod reqwest_api;

pub use api::ShortenerApi;
pub use reqwest_api::ReqwestShortenerApi;

#[cfg(test)]
pub use api::MockShortenerApi;
