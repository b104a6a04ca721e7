//! Services for the application layer.

pub mod form_controller;
pub mod link_resolver;

pub use form_controller::{CopyOutcome, FormController};
pub use link_resolver::LinkResolver;
