//! Static asset cache for the serving layer.
//!
//! Asset bytes are read from disk once per filename and then served from
//! memory for the life of the process. The HTTP server that fronts this
//! cache is an external collaborator; only the cache lives here.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Errors from asset lookup.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset name not allowed: {0}")]
    BadName(String),
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A cached asset: bytes plus the headers the serving layer needs.
#[derive(Debug, Clone)]
pub struct CachedAsset {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    /// Content hash, usable as an ETag.
    pub etag: String,
}

/// Process-wide, lazily populated cache keyed by filename.
#[derive(Debug, Clone)]
pub struct StaticCache {
    root: PathBuf,
    entries: Arc<Mutex<HashMap<String, Arc<CachedAsset>>>>,
}

impl StaticCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Arc::default(),
        }
    }

    /// Fetch an asset by filename, reading it from disk on first request.
    ///
    /// Names with path separators or `..` segments are rejected so the
    /// cache can never serve files outside its root.
    pub fn fetch(&self, name: &str) -> Result<Arc<CachedAsset>, AssetError> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(AssetError::BadName(name.to_owned()));
        }

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(asset) = entries.get(name) {
            return Ok(Arc::clone(asset));
        }

        tracing::info!(name, "loading asset");
        let path = self.root.join(name);
        let bytes = std::fs::read(&path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => AssetError::NotFound(name.to_owned()),
            _ => AssetError::Io(err),
        })?;

        let asset = Arc::new(CachedAsset {
            etag: sha256_hex(&bytes),
            content_type: content_type_for(name),
            bytes,
        });
        entries.insert(name.to_owned(), Arc::clone(&asset));
        Ok(asset)
    }

    /// Number of assets currently cached.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn content_type_for(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("html") => "text/html",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

pub fn crate_info() -> &'static str {
    "woodview-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with(name: &str, contents: &[u8]) -> (tempfile::TempDir, StaticCache) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(name), contents).unwrap();
        let cache = StaticCache::new(dir.path());
        (dir, cache)
    }

    #[test]
    fn second_fetch_is_served_from_memory() {
        let (dir, cache) = cache_with("window.js", b"export {}");
        let first = cache.fetch("window.js").unwrap();

        // Remove the backing file; the cache must not notice.
        std::fs::remove_file(dir.path().join("window.js")).unwrap();
        let second = cache.fetch("window.js").unwrap();
        assert_eq!(first.bytes, second.bytes);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn content_types_by_extension() {
        let (_dir, cache) = cache_with("worker.js", b"{}");
        assert_eq!(cache.fetch("worker.js").unwrap().content_type, "application/javascript");
        assert_eq!(content_type_for("client_bg.wasm"), "application/wasm");
        assert_eq!(content_type_for("scene.svg"), "image/svg+xml");
        assert_eq!(content_type_for("blob"), "application/octet-stream");
    }

    #[test]
    fn etag_is_content_derived() {
        let (_dir, cache) = cache_with("a.js", b"same bytes");
        let asset = cache.fetch("a.js").unwrap();
        assert_eq!(asset.etag, sha256_hex(b"same bytes"));
    }

    #[test]
    fn missing_asset_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let cache = StaticCache::new(dir.path());
        assert!(matches!(
            cache.fetch("missing.js"),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn traversal_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cache = StaticCache::new(dir.path());
        for name in ["../secret", "a/b.js", "a\\b.js", ""] {
            assert!(matches!(cache.fetch(name), Err(AssetError::BadName(_))));
        }
    }
}
