//! Clipboard access.
//!
//! Provides a [`Clipboard`] trait with one production implementation:
//! - [`SystemClipboard`] - Desktop clipboard via `arboard`

mod service;
mod system_clipboard;

pub use service::Clipboard;
pub use system_clipboard::SystemClipboard;

#[cfg(test)]
pub use service::MockClipboard;
