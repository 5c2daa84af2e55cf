// Configuration module entry point
// Loads layered configuration and builds the shared application state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, StaticFilesConfig,
    TemplatesConfig,
};

/// Environment variable that overrides the listen address
pub const PORT_ENV: &str = "PORT";

impl Config {
    /// Load configuration from `config.toml` (optional) and `ECHO_*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("ECHO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "localhost")?
            .set_default("server.port", 3000)?
            .set_default("http.server_name", crate::echo::handler::DEFAULT_SERVER_NAME)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("templates.html", "templates/index.html")?
            .set_default("static_files.dir", "public")?
            .set_default("static_files.prefix", "/public/")?
            .set_default("static_files.files", vec!["/favicon.ico", "/manifest.json"])?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    /// Listen address, honouring the `PORT` environment variable
    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        self.resolve_listen_addr(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Resolve the listen address from an optional `PORT` value
    ///
    /// Unset or empty uses `server.host:server.port`; a bare port listens on
    /// every interface; `host:port` is used as given, an empty host also
    /// meaning every interface.
    pub fn resolve_listen_addr(&self, port_env: Option<&str>) -> Result<SocketAddr, String> {
        let (host, port) = match port_env.filter(|p| !p.is_empty()) {
            None => (self.server.host.as_str(), self.server.port.to_string()),
            Some(value) => match value.rsplit_once(':') {
                Some((host, port)) => (host, port.to_string()),
                None => ("", value.to_string()),
            },
        };

        let host = match host {
            "" => "0.0.0.0",
            "localhost" => "127.0.0.1",
            other => other,
        };

        format!("{host}:{port}")
            .parse()
            .map_err(|e| format!("Invalid address '{host}:{port}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Config {
        Config::load_from("/nonexistent/echo-config").unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = defaults();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.http.server_name, "HTTP echo server");
        assert_eq!(cfg.templates.html, "templates/index.html");
        assert_eq!(cfg.static_files.prefix, "/public/");
        assert_eq!(cfg.static_files.files, ["/favicon.ico", "/manifest.json"]);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn test_listen_addr_without_port_env() {
        let cfg = defaults();
        assert_eq!(cfg.resolve_listen_addr(None).unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.resolve_listen_addr(Some("")).unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_listen_addr_bare_port() {
        let cfg = defaults();
        let addr = cfg.resolve_listen_addr(Some("8080")).unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_listen_addr_host_and_port() {
        let cfg = defaults();
        assert_eq!(cfg.resolve_listen_addr(Some(":5000")).unwrap().to_string(), "0.0.0.0:5000");
        assert_eq!(cfg.resolve_listen_addr(Some("10.0.0.1:80")).unwrap().to_string(), "10.0.0.1:80");
        assert_eq!(cfg.resolve_listen_addr(Some("[::1]:9000")).unwrap().to_string(), "[::1]:9000");
    }

    #[test]
    fn test_listen_addr_invalid() {
        let cfg = defaults();
        assert!(cfg.resolve_listen_addr(Some("not-a-port")).is_err());
        assert!(cfg.resolve_listen_addr(Some("host.example:80")).is_err());
    }
}
