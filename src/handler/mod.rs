//! Request handler module
//!
//! Routes each request either to the static-asset passthrough or to the
//! echo core, and writes the access log.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
