use std::sync::Arc;

use recruit_core::store::ApplicationStore;

use crate::cache::ListingCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every field is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Storage behind the submission pipeline, the listing and the health check.
    pub store: Arc<dyn ApplicationStore>,
    /// Cached newest-first listing, invalidated on every accepted submission.
    pub listing: Arc<ListingCache>,
}

impl AppState {
    /// State backed by PostgreSQL through `pool`.
    pub fn new(pool: recruit_db::DbPool, config: ServerConfig) -> Self {
        Self::with_store(Arc::new(recruit_db::PgApplicationStore::new(pool)), config)
    }

    /// State over any store, with a cold listing cache.
    pub fn with_store(store: Arc<dyn ApplicationStore>, config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            store,
            listing: Arc::new(ListingCache::new()),
        }
    }
}
