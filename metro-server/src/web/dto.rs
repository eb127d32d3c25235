//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Route, Station};
use crate::planner::SearchResult;

/// Request to search for routes between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteSearchRequest {
    /// Origin station name fragment
    pub origin: String,

    /// Destination station name fragment
    pub destination: String,
}

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Name fragment
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// Request for station suggestions while the search form is being filled in.
#[derive(Debug, Deserialize)]
pub struct SuggestStationsRequest {
    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub destination: String,
}

/// A station reference in responses.
#[derive(Debug, Serialize, PartialEq)]
pub struct StationSummary {
    pub id: String,
    pub name: String,
}

/// A route reference in responses.
#[derive(Debug, Serialize, PartialEq)]
pub struct RouteSummary {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// A candidate itinerary.
#[derive(Debug, Serialize)]
pub struct SearchResultDto {
    /// Primary route (the boarding line for transfers)
    pub route: RouteSummary,

    /// Resolved origin station
    pub origin: StationSummary,

    /// Resolved destination station
    pub destination: StationSummary,

    /// Transfer stations, empty for direct routes
    pub transfers: Vec<StationSummary>,

    /// Station count used for ranking
    pub total_stations: usize,

    /// Estimated travel time, e.g. "33 min"
    pub estimated_time: String,
}

/// Response for route search.
#[derive(Debug, Serialize)]
pub struct RouteSearchResponse {
    /// Results, best first
    pub results: Vec<SearchResultDto>,
}

/// Response for station search and suggestions.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationSummary>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationSummary {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
        }
    }
}

impl RouteSummary {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id.to_string(),
            name: route.name.clone(),
            color: route.color.clone(),
        }
    }
}

impl SearchResultDto {
    /// Create from a search result.
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            route: RouteSummary::from_route(&result.route),
            origin: StationSummary::from_station(&result.origin),
            destination: StationSummary::from_station(&result.destination),
            transfers: result
                .transfers
                .iter()
                .map(|s| StationSummary::from_station(s))
                .collect(),
            total_stations: result.total_stations,
            estimated_time: result.estimated_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::la_metro;
    use crate::planner::{FinderConfig, RouteFinder};

    #[test]
    fn search_result_json_shape() {
        let net = la_metro().unwrap();
        let config = FinderConfig::default();
        let results = RouteFinder::new(&net, &config).find_routes("Union", "Long Beach");

        let json = serde_json::to_value(SearchResultDto::from_result(&results[0])).unwrap();
        assert_eq!(json["route"]["id"], "red-line");
        assert_eq!(json["route"]["color"], "#ff0000");
        assert_eq!(json["origin"]["name"], "Union Station");
        assert_eq!(json["destination"]["id"], "blue-long-beach");
        assert_eq!(json["transfers"][0]["id"], "red-7th-street");
        assert_eq!(json["total_stations"], 33);
        assert_eq!(json["estimated_time"], "66 min");
    }

    #[test]
    fn suggest_request_defaults_to_empty_fragments() {
        let req: SuggestStationsRequest = serde_json::from_str(r#"{ "origin": "pico" }"#).unwrap();
        assert_eq!(req.origin, "pico");
        assert_eq!(req.destination, "");
    }
}
