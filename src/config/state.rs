// Application state module
// Everything a connection needs, built once at startup and shared read-only

use super::types::Config;
use crate::echo::render::HtmlRenderer;
use crate::echo::EchoHandler;

/// Application state
pub struct AppState {
    pub config: Config,
    pub echo: EchoHandler,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let echo = EchoHandler::new(HtmlRenderer::from_file(&config.templates.html))
            .with_server_name(config.http.server_name.clone());

        Self {
            config: config.clone(),
            echo,
        }
    }
}
