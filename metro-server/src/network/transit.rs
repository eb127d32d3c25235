//! The in-memory station and route dataset.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{LineId, Route, Station, StationId};

use super::NetworkError;
use super::records::{RouteRecord, StationRecord};

/// Immutable snapshot of the metro dataset.
///
/// Stations and routes keep their dataset order, which decides which record
/// wins a name lookup and the order search results are discovered in.
#[derive(Debug)]
pub struct TransitNetwork {
    stations: Vec<Arc<Station>>,
    routes: Vec<Arc<Route>>,
    station_index: HashMap<StationId, usize>,
    loaded_at: DateTime<Utc>,
}

impl TransitNetwork {
    /// Build a network, validating identifiers and route membership.
    ///
    /// Fails if two stations or two routes share an id, or if a route
    /// lists a station id that is not in `stations`.
    pub fn new(stations: Vec<Arc<Station>>, routes: Vec<Route>) -> Result<Self, NetworkError> {
        let station_index = index_stations(&stations)?;

        for route in &routes {
            if let Some(missing) = route
                .stations
                .iter()
                .find(|s| !station_index.contains_key(&s.id))
            {
                return Err(NetworkError::UnknownStation {
                    route: route.id.clone(),
                    station: missing.id.clone(),
                });
            }
        }

        Self::assemble(stations, routes, station_index)
    }

    /// Build a network from wire records.
    ///
    /// Stations embedded in route records are matched to the station list by
    /// id, so every route shares the same `Station` allocations. A route may
    /// also carry stations the list does not have; those stay on the route
    /// but are not resolvable by name.
    pub fn from_records(
        stations: Vec<StationRecord>,
        routes: Vec<RouteRecord>,
    ) -> Result<Self, NetworkError> {
        let stations: Vec<Arc<Station>> = stations
            .into_iter()
            .map(|r| Station::try_from(r).map(Arc::new))
            .collect::<Result<_, _>>()?;
        let station_index = index_stations(&stations)?;

        let routes = routes
            .into_iter()
            .map(|r| {
                r.into_route(|id| station_index.get(id).map(|&i| Arc::clone(&stations[i])))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::assemble(stations, routes, station_index)
    }

    fn assemble(
        stations: Vec<Arc<Station>>,
        routes: Vec<Route>,
        station_index: HashMap<StationId, usize>,
    ) -> Result<Self, NetworkError> {
        check_route_ids(&routes)?;

        Ok(Self {
            stations,
            routes: routes.into_iter().map(Arc::new).collect(),
            station_index,
            loaded_at: Utc::now(),
        })
    }

    /// All stations, in dataset order.
    pub fn stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    /// All routes, in dataset order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Option<&Arc<Station>> {
        self.station_index.get(id).map(|&i| &self.stations[i])
    }

    /// Look up a route by id.
    pub fn route(&self, id: &LineId) -> Option<&Arc<Route>> {
        self.routes.iter().find(|r| &r.id == id)
    }

    /// Resolve a free-text fragment to a station.
    ///
    /// Returns the first station in dataset order whose name contains the
    /// fragment, ignoring case. When a stop has one record per line, the
    /// record listed first wins.
    pub fn resolve_station(&self, fragment: &str) -> Option<&Arc<Station>> {
        self.stations.iter().find(|s| s.name_matches(fragment))
    }

    /// Stations whose name contains `query`, at most `limit` of them.
    pub fn search_stations(&self, query: &str, limit: usize) -> Vec<&Arc<Station>> {
        self.stations
            .iter()
            .filter(|s| s.name_matches(query))
            .take(limit)
            .collect()
    }

    /// Stations whose name contains either fragment, in dataset order.
    ///
    /// Used to populate the search form's suggestion list while the user
    /// types. An empty fragment matches everything.
    pub fn suggest_stations(&self, origin: &str, destination: &str) -> Vec<&Arc<Station>> {
        self.stations
            .iter()
            .filter(|s| s.name_matches(origin) || s.name_matches(destination))
            .collect()
    }

    /// When this snapshot was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Map station ids to their position, rejecting duplicates.
fn index_stations(stations: &[Arc<Station>]) -> Result<HashMap<StationId, usize>, NetworkError> {
    let mut index = HashMap::with_capacity(stations.len());
    for (i, station) in stations.iter().enumerate() {
        if index.insert(station.id.clone(), i).is_some() {
            return Err(NetworkError::DuplicateStation(station.id.clone()));
        }
    }
    Ok(index)
}

/// Reject two routes sharing an id.
fn check_route_ids(routes: &[Route]) -> Result<(), NetworkError> {
    let mut seen: HashSet<&LineId> = HashSet::with_capacity(routes.len());
    match routes.iter().find(|r| !seen.insert(&r.id)) {
        Some(dup) => Err(NetworkError::DuplicateRoute(dup.id.clone())),
        None => Ok(()),
    }
}
