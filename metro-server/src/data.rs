//! Current dataset snapshot with background refresh.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::cache::{CacheConfig, CachedRouteFinder};
use crate::metro_api::{MetroApiError, MetroClient};
use crate::network::TransitNetwork;
use crate::planner::FinderConfig;

/// Thread-safe holder of the current network snapshot.
///
/// Readers take an `Arc` to the current [`CachedRouteFinder`] and search it
/// without holding the lock. A refresh builds a complete new snapshot first
/// and then swaps it in, so readers never see a half-loaded dataset.
#[derive(Clone)]
pub struct TransitData {
    inner: Arc<RwLock<Arc<CachedRouteFinder>>>,
    client: Option<MetroClient>,
    finder_config: FinderConfig,
    cache_config: CacheConfig,
}

impl TransitData {
    /// Create a holder for a fixed network with no upstream API.
    pub fn new(
        network: TransitNetwork,
        finder_config: FinderConfig,
        cache_config: CacheConfig,
    ) -> Self {
        let finder =
            CachedRouteFinder::new(Arc::new(network), finder_config.clone(), &cache_config);
        Self {
            inner: Arc::new(RwLock::new(Arc::new(finder))),
            client: None,
            finder_config,
            cache_config,
        }
    }

    /// Fetch the network from the Metro API, or use `fallback` if that fails.
    ///
    /// The client is kept for later refreshes either way.
    pub async fn fetch_or(
        client: MetroClient,
        fallback: TransitNetwork,
        finder_config: FinderConfig,
        cache_config: CacheConfig,
    ) -> Self {
        let network = match client.fetch_network().await {
            Ok(network) => {
                info!(
                    base_url = client.base_url(),
                    stations = network.stations().len(),
                    "loaded dataset from Metro API"
                );
                network
            }
            Err(e) => {
                warn!(error = %e, "Metro API not available, using built-in data");
                fallback
            }
        };

        let mut data = Self::new(network, finder_config, cache_config);
        data.client = Some(client);
        data
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<CachedRouteFinder> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Whether an upstream API is configured for refresh.
    pub fn can_refresh(&self) -> bool {
        self.client.is_some()
    }

    /// Refresh the dataset from the Metro API.
    ///
    /// On success, replaces the current snapshot (and its search cache) and
    /// returns the new station count. On failure, the existing snapshot is
    /// preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, MetroApiError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| MetroApiError::NotConfigured("no Metro API client".to_string()))?;

        let network = client.fetch_network().await?;
        let count = network.stations().len();
        let finder = CachedRouteFinder::new(
            Arc::new(network),
            self.finder_config.clone(),
            &self.cache_config,
        );

        let mut guard = self.inner.write().await;
        *guard = Arc::new(finder);

        Ok(count)
    }
}
