//! Loading a dataset from a JSON file.
//!
//! The file lists stations once and refers to them from each route by id:
//!
//! ```json
//! {
//!   "stations": [{ "id": "red-union-station", "name": "Union Station", ... }],
//!   "routes": [{ "id": "red-line", "stations": ["red-union-station", ...], ... }]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::{LineId, StationId};

use super::records::{RouteRecord, StationRecord};
use super::{NetworkError, TransitNetwork};

#[derive(Debug, Deserialize)]
struct DatasetFile {
    stations: Vec<StationRecord>,
    routes: Vec<DatasetRoute>,
}

/// A route whose stations are given by id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetRoute {
    id: String,
    name: String,
    color: String,
    stations: Vec<String>,
    #[serde(default)]
    coordinates: Vec<(f64, f64)>,
    #[serde(default)]
    frequency: String,
    #[serde(default)]
    operating_hours: String,
    #[serde(default)]
    description: String,
}

/// Parse a dataset from a JSON string.
///
/// Every station id a route lists must be defined in `stations`.
pub fn from_json_str(json: &str) -> Result<TransitNetwork, NetworkError> {
    let file: DatasetFile = serde_json::from_str(json)?;

    let by_id: HashMap<&str, &StationRecord> =
        file.stations.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut routes = Vec::with_capacity(file.routes.len());
    for route in file.routes {
        let mut stations = Vec::with_capacity(route.stations.len());
        for id in &route.stations {
            let record = by_id.get(id.as_str()).ok_or_else(|| {
                match (LineId::parse(&route.id), StationId::parse(id)) {
                    (Ok(route_id), Ok(station)) => NetworkError::UnknownStation {
                        route: route_id,
                        station,
                    },
                    (Err(e), _) | (_, Err(e)) => NetworkError::InvalidId(e),
                }
            })?;
            stations.push((*record).clone());
        }

        routes.push(RouteRecord {
            id: route.id,
            name: route.name,
            color: route.color,
            stations,
            coordinates: route.coordinates,
            frequency: route.frequency,
            operating_hours: route.operating_hours,
            description: route.description,
        });
    }

    drop(by_id);
    TransitNetwork::from_records(file.stations, routes)
}

/// Load a dataset from a JSON file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<TransitNetwork, NetworkError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let network = from_json_str(&json)?;
    info!(
        path = %path.display(),
        stations = network.stations().len(),
        routes = network.routes().len(),
        "loaded dataset file"
    );
    Ok(network)
}
