//! Representation renderers
//!
//! Three independent serializers over [`CanonicalRequest`](super::model::CanonicalRequest).
//! JSON and XML are pure functions; HTML goes through an injectable template.

pub mod html;
pub mod json;
pub mod xml;

pub use html::{HtmlRenderer, TemplateSource};
