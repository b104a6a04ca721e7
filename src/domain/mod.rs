//! Domain layer: form values and request/response shapes.
//!
//! Nothing here performs I/O. The types describe what one shorten or
//! resolve exchange looks like and are consumed by the application and
//! infrastructure layers.
//!
//! - [`form`] - Form fields and the outbound shorten request built from them
//! - [`outcome`] - Status/body pairs returned by the remote endpoints

pub mod form;
pub mod outcome;

pub use form::{FormFields, ShortenRequest};
pub use outcome::{ResolveOutcome, ShortenOutcome};
