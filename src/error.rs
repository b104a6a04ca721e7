//! Error types shared by the client layers.

/// Errors produced while talking to the shortening service or the local desktop.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP status (DNS, refused connection, timeout, TLS).
    #[error("{0}")]
    Transport(String),

    /// A configured endpoint could not be turned into a request URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// A credential contains bytes that are not allowed in an HTTP header value.
    #[error("Header '{0}' contains characters that cannot be sent")]
    InvalidHeader(&'static str),

    /// The system clipboard rejected the write.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    /// Resolve was asked for an empty code.
    #[error("No short code provided")]
    EmptyCode,
}

impl ClientError {
    /// Text shown in the error panel when a submission fails before a status is received.
    pub fn panel_message(&self) -> String {
        match self {
            Self::Transport(cause) => format!("Network error: {cause}"),
            other => format!("Invalid request: {other}"),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest's Display omits the source chain (e.g. "Connection refused").
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        Self::Transport(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_panel_message() {
        let err = ClientError::Transport("connection refused".to_string());
        assert_eq!(err.panel_message(), "Network error: connection refused");
    }

    #[test]
    fn test_header_panel_message() {
        let err = ClientError::InvalidHeader("password");
        assert_eq!(
            err.panel_message(),
            "Invalid request: Header 'password' contains characters that cannot be sent"
        );
    }
}
