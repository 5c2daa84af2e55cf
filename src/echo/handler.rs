//! Echo request handler
//!
//! Runs one request through capture, negotiation and rendering, then turns
//! the outcome into a response. Any failure short-circuits the remaining
//! steps and becomes a 500 whose body is the error description; a response
//! is either a complete representation or an error, never both.

use super::capture::capture;
use super::error::EchoError;
use super::model::CanonicalRequest;
use super::negotiate::{accept_candidates, Negotiator, Representation};
use super::render::{json, xml, HtmlRenderer};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};

/// Default value of the `Server` response header
pub const DEFAULT_SERVER_NAME: &str = "HTTP echo server";

/// A finished representation ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Built once at startup and shared read-only by every request
#[derive(Debug, Clone)]
pub struct EchoHandler {
    negotiator: Negotiator,
    html: HtmlRenderer,
    server_name: String,
}

impl EchoHandler {
    pub fn new(html: HtmlRenderer) -> Self {
        Self {
            negotiator: Negotiator::default(),
            html,
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_negotiator(mut self, negotiator: Negotiator) -> Self {
        self.negotiator = negotiator;
        self
    }

    #[must_use]
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Echo a request back as a full HTTP response
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Full<Bytes>>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        match self.echo(req).await {
            Ok(rendered) => {
                http::build_echo_response(&self.server_name, rendered.content_type, rendered.body)
            }
            Err(err) => {
                let message = err.to_string();
                logger::log_error(&message);
                http::build_error_response(&self.server_name, &message)
            }
        }
    }

    /// Capture, negotiate and render without building a response
    pub async fn echo<B>(&self, req: Request<B>) -> Result<Rendered, EchoError>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let request = capture(req).await?;

        let accept = self.negotiator.negotiate(&accept_candidates(&request));
        logger::log_negotiated(&request.method, &request.host, &request.path, &accept);

        let representation = Representation::for_media_type(&accept)
            .ok_or_else(|| EchoError::NegotiationMismatch(accept.clone()))?;

        let body = self.render(representation, &request).await?;
        Ok(Rendered {
            content_type: representation.content_type(),
            body,
        })
    }

    async fn render(
        &self,
        representation: Representation,
        request: &CanonicalRequest,
    ) -> Result<Vec<u8>, EchoError> {
        let body = match representation {
            Representation::Json => json::render(request)?,
            Representation::Xml => xml::render(request)?,
            Representation::Html => self.html.render(request).await?,
        };
        Ok(body)
    }
}
