//! Content negotiation
//!
//! Picks one output representation from the client's `Accept` list. Tokens
//! are compared literally: no whitespace trimming, no q-value or parameter
//! parsing. The first client token found in the supported list wins;
//! anything else falls back to `*/*`.

use super::model::CanonicalRequest;

pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_HTML: &str = "text/html";
pub const APPLICATION_XML: &str = "application/xml";
pub const ANY: &str = "*/*";

/// Media types the server can produce, in the order they are checked
pub const SUPPORTED: [&str; 4] = [APPLICATION_JSON, TEXT_HTML, APPLICATION_XML, ANY];

/// Output representations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    Xml,
    Html,
}

/// Media type to renderer associations. `*/*` shares the JSON renderer.
const DISPATCH: [(&str, Representation); 4] = [
    (APPLICATION_JSON, Representation::Json),
    (TEXT_HTML, Representation::Html),
    (APPLICATION_XML, Representation::Xml),
    (ANY, Representation::Json),
];

impl Representation {
    /// Look up the renderer for a negotiated media type
    pub fn for_media_type(media_type: &str) -> Option<Self> {
        DISPATCH
            .iter()
            .find(|(token, _)| *token == media_type)
            .map(|(_, repr)| *repr)
    }

    /// `Content-Type` written with a successful response
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => APPLICATION_JSON,
            Self::Xml => APPLICATION_XML,
            Self::Html => TEXT_HTML,
        }
    }
}

/// Matches client preferences against a fixed supported-type list
#[derive(Debug, Clone)]
pub struct Negotiator {
    supported: Vec<String>,
}

impl Default for Negotiator {
    fn default() -> Self {
        Self::with_supported(SUPPORTED.iter().map(ToString::to_string).collect())
    }
}

impl Negotiator {
    pub const fn with_supported(supported: Vec<String>) -> Self {
        Self { supported }
    }

    /// Return the first acceptable type the server supports, or `*/*`
    pub fn negotiate<S: AsRef<str>>(&self, accepted: &[S]) -> String {
        accepted
            .iter()
            .map(AsRef::as_ref)
            .find(|candidate| self.supported.iter().any(|s| s == candidate))
            .unwrap_or(ANY)
            .to_string()
    }
}

/// Candidate tokens from the captured `Accept` header values
///
/// A single occurrence is split on commas; multiple occurrences are used
/// as-is, one token each.
pub fn accept_candidates(request: &CanonicalRequest) -> Vec<String> {
    let Some(accept) = request
        .headers
        .iter()
        .find(|h| h.key.eq_ignore_ascii_case("accept"))
    else {
        return Vec::new();
    };

    match accept.value.as_slice() {
        [single] => single.split(',').map(ToString::to_string).collect(),
        values => values.to_vec(),
    }
}
