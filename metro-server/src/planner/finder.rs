//! Direct and single-transfer route search.
//!
//! Finds itineraries between two stations across the lines of a
//! [`TransitNetwork`]:
//!
//! - a **direct** result for every line carrying both stations, costed by
//!   the number of stops between them;
//! - a **transfer** result for every ordered pair of distinct lines where
//!   the first carries the origin, the second carries the destination, and
//!   the two share at least one station.
//!
//! Transfer results are costed by the combined length of both lines rather
//! than the stops actually travelled. Only the first shared station is
//! reported.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Route, Station};
use crate::network::TransitNetwork;

use super::config::FinderConfig;
use super::rank::rank_results;

/// A candidate itinerary.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The line shown for this itinerary (the boarding line for transfers).
    pub route: Arc<Route>,

    pub origin: Arc<Station>,

    pub destination: Arc<Station>,

    /// Where to change lines. Empty for direct results, otherwise one station.
    pub transfers: Vec<Arc<Station>>,

    /// Station count, used as the cost for ranking.
    pub total_stations: usize,

    pub estimated_minutes: usize,
}

impl SearchResult {
    /// Whether this itinerary stays on one line.
    pub fn is_direct(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Estimated time for display, e.g. "33 min".
    pub fn estimated_time(&self) -> String {
        format!("{} min", self.estimated_minutes)
    }
}

/// Route finder over a network snapshot.
pub struct RouteFinder<'a> {
    network: &'a TransitNetwork,
    config: &'a FinderConfig,
}

impl<'a> RouteFinder<'a> {
    /// Create a new finder.
    pub fn new(network: &'a TransitNetwork, config: &'a FinderConfig) -> Self {
        Self { network, config }
    }

    /// Find itineraries between two free-text station fragments.
    ///
    /// Each fragment resolves to the first station whose name contains it.
    /// If either fails to resolve the result is empty.
    pub fn find_routes(&self, origin: &str, destination: &str) -> Vec<SearchResult> {
        let (Some(from), Some(to)) = (
            self.network.resolve_station(origin),
            self.network.resolve_station(destination),
        ) else {
            debug!(origin, destination, "no station matched");
            return Vec::new();
        };

        self.find_between(from, to)
    }

    /// Find itineraries between two resolved stations, ranked by station count.
    pub fn find_between(
        &self,
        origin: &Arc<Station>,
        destination: &Arc<Station>,
    ) -> Vec<SearchResult> {
        let mut results = self.direct_results(origin, destination);
        results.extend(self.transfer_results(origin, destination));

        debug!(
            origin = %origin.id,
            destination = %destination.id,
            results = results.len(),
            "route search complete"
        );

        rank_results(results)
    }

    /// One result per line carrying both stations.
    fn direct_results(
        &self,
        origin: &Arc<Station>,
        destination: &Arc<Station>,
    ) -> Vec<SearchResult> {
        self.network
            .routes()
            .iter()
            .filter_map(|route| {
                let from = route.position_of(&origin.id)?;
                let to = route.position_of(&destination.id)?;
                let span = from.abs_diff(to);

                Some(SearchResult {
                    route: Arc::clone(route),
                    origin: Arc::clone(origin),
                    destination: Arc::clone(destination),
                    transfers: Vec::new(),
                    total_stations: span + 1,
                    estimated_minutes: span * self.config.minutes_per_hop,
                })
            })
            .collect()
    }

    /// One result per ordered pair of distinct lines joined by a shared station.
    fn transfer_results(
        &self,
        origin: &Arc<Station>,
        destination: &Arc<Station>,
    ) -> Vec<SearchResult> {
        let routes = self.network.routes();
        let mut results = Vec::new();

        for first in routes.iter().filter(|r| r.contains(&origin.id)) {
            for second in routes {
                if second.id == first.id || !second.contains(&destination.id) {
                    continue;
                }

                let Some(transfer) = first.shared_stations(second).next() else {
                    continue;
                };

                let total_stations = first.len() + second.len();
                results.push(SearchResult {
                    route: Arc::clone(first),
                    origin: Arc::clone(origin),
                    destination: Arc::clone(destination),
                    transfers: vec![Arc::clone(transfer)],
                    total_stations,
                    estimated_minutes: total_stations * self.config.transfer_minutes_per_station,
                });
            }
        }

        results
    }
}
