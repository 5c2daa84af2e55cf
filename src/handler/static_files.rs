//! Static asset passthrough
//!
//! Serves a few well-known files and everything under the configured prefix
//! straight from the static directory. Paths that resolve outside the
//! directory, and files that do not exist, answer 404.

use crate::config::StaticFilesConfig;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Request details that affect how an asset is answered
#[derive(Debug, Default)]
pub struct AssetRequest<'a> {
    pub is_head: bool,
    pub if_none_match: Option<&'a str>,
}

/// Map a request path to a path relative to the static directory
///
/// Returns `None` when the path belongs to the echo endpoint.
pub fn resolve<'p>(path: &'p str, config: &StaticFilesConfig) -> Option<&'p str> {
    if config.files.iter().any(|f| f == path) {
        return Some(path.trim_start_matches('/'));
    }
    if config.prefix.is_empty() {
        return None;
    }
    path.strip_prefix(config.prefix.as_str())
}

/// Serve one asset from `dir`
pub async fn serve(dir: &str, relative: &str, req: &AssetRequest<'_>) -> Response<Full<Bytes>> {
    let Some((content, file_path)) = load(dir, relative).await else {
        return http::build_404_response();
    };

    let etag = cache::etag_for(&content);
    if cache::is_not_modified(req.if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    http::response::build_cached_response(
        Bytes::from(content),
        mime::content_type_for(&file_path),
        &etag,
        req.is_head,
    )
}

/// Read an asset, refusing anything that escapes `dir`
pub async fn load(dir: &str, relative: &str) -> Option<(Vec<u8>, PathBuf)> {
    let root = match Path::new(dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{dir}': {e}"
            ));
            return None;
        }
    };

    let mut file_path = root.join(relative);
    if relative.is_empty() || relative.ends_with('/') || file_path.is_dir() {
        file_path = file_path.join(INDEX_FILE);
    }

    // Missing files are an ordinary 404
    let canonical = file_path.canonicalize().ok()?;
    if !canonical.starts_with(&root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {relative} -> {}",
            canonical.display()
        ));
        return None;
    }

    match fs::read(&canonical).await {
        Ok(content) => Some((content, canonical)),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                canonical.display()
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    fn config() -> StaticFilesConfig {
        StaticFilesConfig {
            dir: "public".to_string(),
            prefix: "/public/".to_string(),
            files: vec!["/favicon.ico".to_string(), "/manifest.json".to_string()],
        }
    }

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("echo-static-{name}-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("css")).unwrap();
        std::fs::write(dir.join("manifest.json"), "{}").unwrap();
        std::fs::write(dir.join("css/site.css"), "body{}").unwrap();
        std::fs::write(dir.join("css/index.html"), "<p>css</p>").unwrap();
        dir
    }

    #[test]
    fn test_resolve() {
        let cfg = config();
        assert_eq!(resolve("/favicon.ico", &cfg), Some("favicon.ico"));
        assert_eq!(resolve("/manifest.json", &cfg), Some("manifest.json"));
        assert_eq!(resolve("/public/css/site.css", &cfg), Some("css/site.css"));
        assert_eq!(resolve("/", &cfg), None);
        assert_eq!(resolve("/widgets", &cfg), None);
        assert_eq!(resolve("/publicity", &cfg), None);
    }

    #[tokio::test]
    async fn test_serve_existing_file() {
        let dir = fixture_dir("serve");
        let resp = serve(dir.to_str().unwrap(), "css/site.css", &AssetRequest::default()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/css; charset=utf-8");
        assert!(resp.headers().contains_key("etag"));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_directory_serves_index() {
        let dir = fixture_dir("index");
        let (content, path) = load(dir.to_str().unwrap(), "css/").await.unwrap();
        assert_eq!(content, b"<p>css</p>");
        assert!(path.ends_with("css/index.html"));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_and_traversal_are_404() {
        let dir = fixture_dir("traversal");
        std::fs::write(dir.parent().unwrap().join("echo-secret.txt"), "secret").unwrap();
        let root = dir.to_str().unwrap();

        let missing = serve(root, "nope.css", &AssetRequest::default()).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert!(load(root, "../echo-secret.txt").await.is_none());

        std::fs::remove_file(dir.parent().unwrap().join("echo-secret.txt")).unwrap();
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_if_none_match_returns_304() {
        let dir = fixture_dir("etag");
        let root = dir.to_str().unwrap();
        let first = serve(root, "manifest.json", &AssetRequest::default()).await;
        let etag = first.headers()["etag"].to_str().unwrap().to_string();

        let req = AssetRequest {
            is_head: false,
            if_none_match: Some(&etag),
        };
        let second = serve(root, "manifest.json", &req).await;
        assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
        std::fs::remove_dir_all(dir).unwrap();
    }
}
