//! Object storage for uploaded product images.
//!
//! Objects live on the filesystem under the configured media root and are
//! served publicly at `/media/{key}` by both binaries. Keys are namespaced
//! by upload timestamp and original filename; two uploads of the same
//! filename within the same millisecond would collide, matching the upstream
//! key scheme. Nothing ever deletes an object: records that stop referencing
//! a URL simply orphan it.

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tokio::fs;

/// Errors from media store operations.
#[derive(Debug, Error)]
pub enum MediaStoreError {
    /// Filesystem write failed.
    #[error("failed to store object {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Handle to a stored object, returned by [`MediaStore::put`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    key: String,
}

impl StoredObject {
    /// The object's key relative to the media root.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Filesystem-backed object store with public download URLs.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    base_url: String,
}

impl MediaStore {
    /// Create a store rooted at `root`, resolving URLs against `base_url`.
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            root: root.into(),
            base_url,
        }
    }

    /// Build an upload key for a product image: `products/{millis}_{filename}`.
    #[must_use]
    pub fn object_key(filename: &str) -> String {
        format!(
            "products/{}_{}",
            Utc::now().timestamp_millis(),
            sanitize_filename(filename)
        )
    }

    /// Write an object under `key`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `MediaStoreError::Io` if the directory or file write fails.
    pub async fn put(&self, key: &str, bytes: &[u8]) -> Result<StoredObject, MediaStoreError> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|source| {
                MediaStoreError::Io {
                    key: key.to_owned(),
                    source,
                }
            })?;
        }
        fs::write(&path, bytes)
            .await
            .map_err(|source| MediaStoreError::Io {
                key: key.to_owned(),
                source,
            })?;

        tracing::debug!(key, bytes = bytes.len(), "stored media object");

        Ok(StoredObject {
            key: key.to_owned(),
        })
    }

    /// Resolve the public download URL for a stored object.
    #[must_use]
    pub fn download_url(&self, object: &StoredObject) -> String {
        format!("{}/media/{}", self.base_url, object.key)
    }

    /// The directory objects are stored under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Replace anything outside `[A-Za-z0-9._-]` so a browser-supplied filename
/// cannot escape the media root.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches(['.', '_', '-']).is_empty() {
        "upload".to_owned()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "basha-media-{label}-{}-{}",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ))
    }

    #[test]
    fn test_sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_filename("kettle-1.5L_front.jpg"), "kettle-1.5L_front.jpg");
    }

    #[test]
    fn test_sanitize_replaces_separators() {
        assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_filename("mixer grinder.png"), "mixer_grinder.png");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("..."), "upload");
    }

    #[test]
    fn test_object_key_shape() {
        let key = MediaStore::object_key("fridge.jpg");
        let rest = key.strip_prefix("products/").expect("products/ namespace");
        let (millis, name) = rest.split_once('_').expect("timestamp separator");
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(name, "fridge.jpg");
    }

    #[test]
    fn test_download_url_trims_trailing_slash() {
        let store = MediaStore::new("media", "http://localhost:3000/");
        let object = StoredObject {
            key: "products/1_a.jpg".to_owned(),
        };
        assert_eq!(
            store.download_url(&object),
            "http://localhost:3000/media/products/1_a.jpg"
        );
    }

    #[tokio::test]
    async fn test_put_writes_object_under_root() {
        let root = temp_root("put");
        let store = MediaStore::new(&root, "http://localhost:3000");

        let object = store
            .put("products/1_kettle.jpg", b"jpeg bytes")
            .await
            .expect("put succeeds");

        let on_disk = tokio::fs::read(root.join("products/1_kettle.jpg"))
            .await
            .expect("object exists");
        assert_eq!(on_disk, b"jpeg bytes");
        assert_eq!(
            store.download_url(&object),
            "http://localhost:3000/media/products/1_kettle.jpg"
        );

        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
