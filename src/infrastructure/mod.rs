//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the traits the application layer depends on.
//!
//! # Modules
//!
//! - [`http`] - Calls to the remote shorten and fetch endpoints (`reqwest`)
//! - [`clipboard`] - System clipboard access (`arboard`)

pub mod clipboard;
pub mod http;
