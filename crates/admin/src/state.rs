//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::services::auth::LoginThrottle;
use crate::services::media::MediaStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources like the database pool, the media store, and configuration. It
/// is built once per process lifetime in `main`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    media: MediaStore,
    login_throttle: LoginThrottle,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: &AdminConfig, pool: PgPool) -> Self {
        let media = MediaStore::new(&config.media_root, &config.media_base_url);

        Self {
            inner: Arc::new(AppStateInner {
                pool,
                media,
                login_throttle: LoginThrottle::new(),
            }),
        }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the media object store.
    #[must_use]
    pub fn media(&self) -> &MediaStore {
        &self.inner.media
    }

    /// Get a reference to the sign-in throttle.
    #[must_use]
    pub fn login_throttle(&self) -> &LoginThrottle {
        &self.inner.login_throttle
    }
}
