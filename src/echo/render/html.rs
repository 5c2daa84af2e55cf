//! HTML representation
//!
//! Renders the request through a page template. The template source is
//! configuration: either a file read on every render or an in-memory string.
//! Templates see the request under its serialized field names (`Path`,
//! `Headers`, `Body`, `Method`, `Host`, `Params`, `Proto`). Referencing a
//! field that does not exist is a render error.

use crate::echo::error::RenderError;
use crate::echo::model::CanonicalRequest;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::borrow::Cow;
use std::path::PathBuf;
use tokio::fs;

/// Where the page template comes from
#[derive(Debug, Clone)]
pub enum TemplateSource {
    File(PathBuf),
    Inline(String),
}

#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    source: TemplateSource,
}

impl HtmlRenderer {
    pub const fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(TemplateSource::File(path.into()))
    }

    pub fn inline(template: impl Into<String>) -> Self {
        Self::new(TemplateSource::Inline(template.into()))
    }

    /// Load the template and render the request; nothing is returned on failure
    pub async fn render(&self, request: &CanonicalRequest) -> Result<Vec<u8>, RenderError> {
        let template = self.load().await?;
        render_template(&template, request)
    }

    async fn load(&self) -> Result<Cow<'_, str>, RenderError> {
        match &self.source {
            TemplateSource::Inline(template) => Ok(Cow::Borrowed(template.as_str())),
            TemplateSource::File(path) => fs::read_to_string(path)
                .await
                .map(Cow::Owned)
                .map_err(|e| RenderError::Template(format!("open {}: {e}", path.display()))),
        }
    }
}

/// Render a template source string against the request
pub fn render_template(template: &str, request: &CanonicalRequest) -> Result<Vec<u8>, RenderError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::Html);

    let page = env.template_from_str(template)?;
    Ok(page.render(request)?.into_bytes())
}
