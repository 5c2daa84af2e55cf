//! Echo error types
//!
//! Every variant is terminal for the request it belongs to. The `Display`
//! text doubles as the body of the 500 response.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EchoError {
    /// The request body could not be read to the end
    #[error("{0}")]
    Capture(String),

    /// Negotiation produced a media type with no renderer behind it
    #[error("Unsupported Accept type: {0}")]
    NegotiationMismatch(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Xml(String),

    /// Template could not be loaded, parsed or executed
    #[error("{0}")]
    Template(String),
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}
