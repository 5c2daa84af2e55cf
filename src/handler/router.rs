//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: static assets first, then the
//! body size guard, then the echo core.

use crate::config::AppState;
use crate::handler::static_files::{self, AssetRequest};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, CONTENT_LENGTH, IF_NONE_MATCH, REFERER, USER_AGENT};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let started = Instant::now();
    let entry = state
        .config
        .logging
        .access_log
        .then(|| access_entry(&req, peer_addr));

    let response = route_request(req, &state).await;

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or_default();
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

async fn route_request<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let statics = &state.config.static_files;
    if let Some(relative) = static_files::resolve(req.uri().path(), statics) {
        let asset_req = AssetRequest {
            is_head: req.method() == Method::HEAD,
            if_none_match: req.headers().get(IF_NONE_MATCH).and_then(|v| v.to_str().ok()),
        };
        return static_files::serve(&statics.dir, relative, &asset_req).await;
    }

    if let Some(resp) = check_body_size(&req, state) {
        return resp;
    }

    state.echo.handle(req).await
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, state: &AppState) -> Option<Response<Full<Bytes>>> {
    let max_body_size = state.config.http.max_body_size;
    let size_str = req.headers().get(CONTENT_LENGTH)?.to_str().ok()?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response(state.echo.server_name()))
        }
        Ok(_) => None,
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
    }
}

fn access_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.protocol = format!("{:?}", req.version());
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry
}
