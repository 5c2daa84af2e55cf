//! Echo core
//!
//! Capture an inbound request into a [`CanonicalRequest`], negotiate an
//! output representation and render it as JSON, XML or HTML.

pub mod capture;
pub mod error;
pub mod handler;
pub mod model;
pub mod negotiate;
pub mod render;

pub use error::{EchoError, RenderError};
pub use handler::{EchoHandler, Rendered};
pub use model::{CanonicalRequest, Header, Params};
pub use negotiate::{Negotiator, Representation};
