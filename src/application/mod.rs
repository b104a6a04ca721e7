//! Application layer: the form controller and the link resolver.
//!
//! Services drive the view state and call out through the infrastructure
//! traits, so every behaviour can be exercised with mocks.
//!
//! # Available Services
//!
//! - [`services::form_controller::FormController`] - Submit, back, copy and panel toggles
//! - [`services::link_resolver::LinkResolver`] - Short code lookup on the fetch endpoint
//! - [`notifier::Notifier`] - Blocking user notifications

pub mod notifier;
pub mod services;

pub use notifier::Notifier;
