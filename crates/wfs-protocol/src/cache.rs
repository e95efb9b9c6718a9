//! URL-keyed cache of capabilities documents.
//!
//! Each URL is fetched and parsed at most once. Concurrent requests for the
//! same URL share one in-flight load and all receive the same result, so a
//! successful load hands every caller the same `Arc` instance. Failed loads
//! are kept as well until [`CapabilitiesCache::invalidate`] is called.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::capabilities::CapabilitiesDocument;
use crate::error::WfsResult;
use crate::loader::XmlLoader;

type SharedLoad = Shared<BoxFuture<'static, WfsResult<Arc<CapabilitiesDocument>>>>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Memoizing front for [`CapabilitiesDocument::from_url`].
pub struct CapabilitiesCache {
    loader: Arc<dyn XmlLoader>,
    entries: Mutex<HashMap<String, SharedLoad>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CapabilitiesCache {
    /// Create an empty cache that loads through `loader`.
    pub fn new(loader: Arc<dyn XmlLoader>) -> Self {
        Self {
            loader,
            entries: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get the document for `url`, loading it on first request.
    ///
    /// URLs are compared as exact strings.
    pub async fn get(&self, url: &str) -> WfsResult<Arc<CapabilitiesDocument>> {
        let load = {
            let mut entries = self.entries.lock().await;
            match entries.get(url) {
                Some(load) => {
                    debug!(url = %url, "Capabilities cache hit");
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    metrics::counter!("wfs_capabilities_cache_hits_total").increment(1);
                    load.clone()
                }
                None => {
                    debug!(url = %url, "Capabilities cache miss");
                    self.misses.fetch_add(1, Ordering::Relaxed);
                    metrics::counter!("wfs_capabilities_fetch_total").increment(1);
                    let load = self.start_load(url);
                    entries.insert(url.to_string(), load.clone());
                    load
                }
            }
        };

        // The lock is released here; the load runs without it.
        load.await
    }

    fn start_load(&self, url: &str) -> SharedLoad {
        let loader = Arc::clone(&self.loader);
        let url = url.to_string();
        async move {
            CapabilitiesDocument::from_url(&url, loader.as_ref())
                .await
                .map(Arc::new)
        }
        .boxed()
        .shared()
    }

    /// Forget the entry for `url` so the next request loads it again.
    /// Callers already waiting on the old load still receive its result.
    pub async fn invalidate(&self, url: &str) -> bool {
        let removed = self.entries.lock().await.remove(url).is_some();
        if removed {
            info!(url = %url, "Capabilities cache entry invalidated");
        }
        removed
    }

    /// Drop every entry and reset statistics.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        debug!("Capabilities cache cleared");
    }

    /// Number of URLs with a cached or in-flight load.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
