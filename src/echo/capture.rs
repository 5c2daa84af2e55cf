//! Request capture
//!
//! Turns a live request into a [`CanonicalRequest`]. The body stream is
//! drained exactly once; a failure while reading it is the only way capture
//! can fail.

use super::error::EchoError;
use super::model::{CanonicalRequest, Header, Params};
use http_body_util::BodyExt;
use hyper::body::Body;
use hyper::header::HOST;
use hyper::http::request::Parts;
use hyper::{HeaderMap, Request};

/// Capture a request, consuming its body
pub async fn capture<B>(req: Request<B>) -> Result<CanonicalRequest, EchoError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let (parts, body) = req.into_parts();
    let collected = body
        .collect()
        .await
        .map_err(|e| EchoError::Capture(e.to_string()))?;
    let bytes = collected.to_bytes();
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(describe(&parts, body))
}

/// Build the canonical model from request head parts and an already decoded body
pub fn describe(parts: &Parts, body: String) -> CanonicalRequest {
    CanonicalRequest::new(
        parts.method.as_str(),
        request_host(parts),
        parts.uri.path(),
        format!("{:?}", parts.version),
        collect_headers(&parts.headers),
        parse_query(parts.uri.query()),
        body,
    )
}

/// One entry per distinct header name, values in the order received
fn collect_headers(headers: &HeaderMap) -> Vec<Header> {
    headers
        .keys()
        .map(|name| {
            let values = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect();
            Header::new(name.as_str(), values)
        })
        .collect()
}

/// Authority from the request target, falling back to the `Host` header
fn request_host(parts: &Parts) -> String {
    if let Some(authority) = parts.uri.authority() {
        return authority.to_string();
    }
    parts
        .headers
        .get(HOST)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

/// Group query-string pairs by name
pub fn parse_query(query: Option<&str>) -> Params {
    let mut params = Params::new();
    let Some(query) = query else {
        return params;
    };
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}
