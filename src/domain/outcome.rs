//! Responses from the shorten and fetch endpoints.

/// Status code the shorten endpoint uses for a created or updated link.
pub const STATUS_OK: u16 = 200;

/// Status and text body of a completed shorten call.
///
/// The body is the bare short code on 200 and a human-readable error otherwise.
/// Neither is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub status: u16,
    pub body: String,
}

impl ShortenOutcome {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Short URL shown to the user: display prefix followed by the returned code.
    pub fn short_url(&self, fetch_prefix: &str) -> String {
        format!("{fetch_prefix}{}", self.body)
    }

    /// Error panel text for a non-200 response.
    pub fn error_message(&self) -> String {
        server_error(self.status, &self.body)
    }
}

/// What the fetch endpoint answered for a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The code maps to `location`; the redirect was not followed.
    Redirect { status: u16, location: String },
    /// Anything that is not a redirect with a `Location` header.
    Failed { status: u16, body: String },
}

impl ResolveOutcome {
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Redirect { .. } => None,
            Self::Failed { status, body } => Some(server_error(*status, body)),
        }
    }
}

fn server_error(status: u16, body: &str) -> String {
    format!("Server error {status}: {body}")
}
