//! Logger module
//!
//! Operational logging for the echo server:
//! - Startup banner
//! - Negotiation results and request errors
//! - Connection-level warnings
//! - Access log lines in combined, common or json format

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn sink() -> &'static writer::LogWriter {
    writer::get().unwrap_or_else(writer::fallback)
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    let log = sink();
    log.write_info(&format!("Listening on {addr}"));
    log.write_info(&format!("HTML template: {}", config.templates.html));
    log.write_info(&format!(
        "Static files: {} (prefix {}, files {})",
        config.static_files.dir,
        config.static_files.prefix,
        config.static_files.files.join(", ")
    ));
    if let Some(workers) = config.server.workers {
        log.write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        log.write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        log.write_info(&format!("Error log: {path}"));
    }
}

pub fn log_negotiated(method: &str, host: &str, path: &str, content_type: &str) {
    sink().write_info(&format!(
        "{method} http://{host}{path} => Negotiated content type: {content_type}"
    ));
}

pub fn log_error(message: &str) {
    sink().write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    sink().write_error(&format!("[WARN] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    log_error(&format!("Failed to serve connection: {err}"));
}

pub fn log_shutdown() {
    sink().write_info("Shutdown signal received, no longer accepting connections");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    sink().write_access(&entry.format(format));
}
