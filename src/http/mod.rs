//! HTTP protocol layer module
//!
//! Response builders, MIME lookup and cache validators shared by the echo
//! core and the static-asset passthrough.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_413_response, build_echo_response,
    build_error_response,
};
