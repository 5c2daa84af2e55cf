//! Canonical request model
//!
//! The format-independent snapshot of one inbound request. Every renderer
//! works from this type, so its field names are the wire names of the JSON
//! representation and the variables visible to the HTML template.

use serde::Serialize;
use std::collections::BTreeMap;

/// One header entry: a name and every value received for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    pub key: String,
    pub value: Vec<String>,
}

impl Header {
    pub fn new(key: impl Into<String>, value: Vec<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Query parameters keyed by name; values keep the order of the query string
pub type Params = BTreeMap<String, Vec<String>>;

/// Immutable description of a captured request
///
/// `headers` is always sorted by key and holds one entry per distinct key.
/// Build it with [`CanonicalRequest::new`], which enforces both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalRequest {
    pub path: String,
    pub headers: Vec<Header>,
    pub body: String,
    pub method: String,
    pub host: String,
    pub params: Params,
    pub proto: String,
}

impl CanonicalRequest {
    /// Assemble a request, merging duplicate header keys and sorting them
    pub fn new(
        method: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
        proto: impl Into<String>,
        headers: Vec<Header>,
        params: Params,
        body: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            headers: normalize_headers(headers),
            body: body.into(),
            method: method.into(),
            host: host.into(),
            params,
            proto: proto.into(),
        }
    }
}

/// Merge entries sharing a key (values appended in arrival order), then sort by key
pub fn normalize_headers(headers: Vec<Header>) -> Vec<Header> {
    let mut merged: Vec<Header> = Vec::with_capacity(headers.len());
    for header in headers {
        match merged.iter_mut().find(|h| h.key == header.key) {
            Some(existing) => existing.value.extend(header.value),
            None => merged.push(header),
        }
    }
    merged.sort_by(|a, b| a.key.cmp(&b.key));
    merged
}
