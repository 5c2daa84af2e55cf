// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub templates: TemplatesConfig,
    pub static_files: StaticFilesConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Listen address and runtime sizing
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Response-level settings for the echo endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Value of the `Server` header on echo responses
    pub server_name: String,
    /// Requests declaring a larger `Content-Length` are answered 413
    pub max_body_size: u64,
}

/// Page template used by the HTML representation
#[derive(Debug, Deserialize, Clone)]
pub struct TemplatesConfig {
    pub html: String,
}

/// Static assets served ahead of the echo endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    /// Directory the assets are read from
    pub dir: String,
    /// URL prefix mapped onto `dir` (e.g. `/public/style.css` -> `public/style.css`)
    pub prefix: String,
    /// Exact request paths served from `dir` by file name
    pub files: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common or json)
    pub access_log_format: String,
    /// Access log file path (stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Connection handling limits
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}
