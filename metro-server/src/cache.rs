//! Caching layer for route searches.
//!
//! A cache belongs to exactly one network snapshot: when the dataset is
//! refreshed a new `CachedRouteFinder` (and an empty cache) replaces the old
//! one, so entries never outlive the data they were computed from.
//!
//! Keys are the lowercased origin and destination fragments, which is all
//! station resolution looks at.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::network::TransitNetwork;
use crate::planner::{FinderConfig, RouteFinder, SearchResult};

/// Cache key: (origin fragment, destination fragment), lowercased.
type SearchKey = (String, String);

/// Cached search results.
type SearchEntry = Arc<Vec<SearchResult>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Route finder with memoized results for one network snapshot.
pub struct CachedRouteFinder {
    network: Arc<TransitNetwork>,
    config: FinderConfig,
    searches: MokaCache<SearchKey, SearchEntry>,
}

impl CachedRouteFinder {
    /// Create a cached finder over `network`.
    pub fn new(network: Arc<TransitNetwork>, config: FinderConfig, cache: &CacheConfig) -> Self {
        let searches = MokaCache::builder()
            .time_to_live(cache.ttl)
            .max_capacity(cache.max_capacity)
            .build();

        Self {
            network,
            config,
            searches,
        }
    }

    /// The network snapshot this finder searches.
    pub fn network(&self) -> &Arc<TransitNetwork> {
        &self.network
    }

    /// Find routes, using the cache if available.
    pub async fn find_routes(&self, origin: &str, destination: &str) -> SearchEntry {
        let key = (origin.to_lowercase(), destination.to_lowercase());

        if let Some(cached) = self.searches.get(&key).await {
            return cached;
        }

        let results =
            RouteFinder::new(&self.network, &self.config).find_routes(origin, destination);
        let entry = Arc::new(results);

        self.searches.insert(key, entry.clone()).await;

        entry
    }
}
