//! Desktop clipboard backed by `arboard`.

use super::service::Clipboard;
use crate::error::ClientError;
use tracing::debug;

/// System clipboard.
///
/// A platform handle is opened per write and dropped right after.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClientError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClientError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClientError::Clipboard(e.to_string()))?;
        debug!(len = text.len(), "Copied to clipboard");
        Ok(())
    }
}
