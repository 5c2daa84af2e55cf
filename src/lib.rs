//! HTTP echo server
//!
//! Mirrors every request back to the caller as JSON, XML or HTML, chosen by
//! the `Accept` header. The echo core lives in [`echo`]; the rest is the
//! hyper/tokio server around it.

pub mod config;
pub mod echo;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
