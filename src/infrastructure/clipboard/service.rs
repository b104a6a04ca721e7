//! Clipboard trait.

use crate::error::ClientError;

/// Destination for "copy short URL".
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Clipboard`] when the platform refuses the write
    /// (no display server, permission denied, unsupported platform).
    fn write_text(&self, text: &str) -> Result<(), ClientError>;
}
