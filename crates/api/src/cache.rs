//! Read cache for the applications listing.
//!
//! Holds one snapshot of the newest-first listing. The submission pipeline
//! invalidates it after every accepted insert, so the next read goes back
//! to the store.

use std::sync::Arc;

use async_trait::async_trait;
use recruit_core::application::Application;
use recruit_core::error::StoreError;
use recruit_core::store::{ApplicationStore, ListingInvalidator};
use tokio::sync::RwLock;

#[derive(Default)]
struct CacheState {
    /// Bumped on every invalidation. A load that started under an older
    /// generation must not be stored.
    generation: u64,
    snapshot: Option<Arc<Vec<Application>>>,
}

#[derive(Default)]
pub struct ListingCache {
    state: RwLock<CacheState>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached listing, loading it from `store` on a miss.
    ///
    /// Store errors are returned to the caller and leave the cache empty.
    pub async fn get_or_load<S>(&self, store: &S) -> Result<Arc<Vec<Application>>, StoreError>
    where
        S: ApplicationStore + ?Sized,
    {
        let generation = {
            let state = self.state.read().await;
            if let Some(snapshot) = &state.snapshot {
                return Ok(Arc::clone(snapshot));
            }
            state.generation
        };

        let fresh = Arc::new(store.list_newest_first().await?);

        let mut state = self.state.write().await;
        if state.generation == generation {
            state.snapshot = Some(Arc::clone(&fresh));
        } else {
            tracing::debug!("Listing invalidated during load, not caching");
        }
        Ok(fresh)
    }

    pub async fn is_warm(&self) -> bool {
        self.state.read().await.snapshot.is_some()
    }
}

#[async_trait]
impl ListingInvalidator for ListingCache {
    async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.snapshot = None;
        tracing::debug!(generation = state.generation, "Applications listing invalidated");
    }
}
