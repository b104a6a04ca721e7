//! Form fields and the shorten request derived from them.

/// Query parameter carrying the long URL.
pub const PARAM_URL: &str = "url";
/// Query parameter carrying the requested short code.
pub const PARAM_ALIAS: &str = "alias";
/// Header authorizing creation or overwrite of an alias.
pub const HEADER_PASSWORD: &str = "password";
/// Header authorizing re-assignment of an alias that already has a password.
pub const HEADER_OLD_PASSWORD: &str = "old_password";

/// Current values of the four form inputs.
///
/// Empty strings mean "not filled in". Values are not trimmed or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub url: String,
    pub alias: String,
    pub password: String,
    pub old_password: String,
}

impl FormFields {
    pub fn new(
        url: impl Into<String>,
        alias: impl Into<String>,
        password: impl Into<String>,
        old_password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            alias: alias.into(),
            password: password.into(),
            old_password: old_password.into(),
        }
    }

    /// Builds the outbound request, dropping every empty field.
    pub fn to_request(&self) -> ShortenRequest {
        ShortenRequest {
            query: non_empty(&[(PARAM_URL, &self.url), (PARAM_ALIAS, &self.alias)]),
            headers: non_empty(&[
                (HEADER_PASSWORD, &self.password),
                (HEADER_OLD_PASSWORD, &self.old_password),
            ]),
        }
    }
}

fn non_empty(fields: &[(&'static str, &String)]) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| (*name, (*value).clone()))
        .collect()
}

/// One GET to the shorten endpoint: query pairs plus credential headers.
///
/// Pairs keep form order. A name appears at most once.
#[derive(Clone, PartialEq, Eq)]
pub struct ShortenRequest {
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
}

impl ShortenRequest {
    pub fn query_value(&self, name: &str) -> Option<&str> {
        lookup(&self.query, name)
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        lookup(&self.headers, name)
    }

    /// Query string as a browser's `URLSearchParams` would serialize it.
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// Names of the headers that will be sent, for logging without values.
    pub fn header_names(&self) -> Vec<&'static str> {
        self.headers.iter().map(|(name, _)| *name).collect()
    }
}

fn lookup<'a>(pairs: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str())
}

// Header values are credentials; keep them out of Debug output and logs.
impl std::fmt::Debug for ShortenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortenRequest")
            .field("query", &self.query)
            .field("headers", &self.header_names())
            .finish()
    }
}
