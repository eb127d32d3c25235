//! Wire records for stations and routes.
//!
//! These mirror the JSON shape used by the upstream Metro API, which is
//! also the shape this server returns from its own `/api` endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, InvalidId, LineId, Route, Station, StationId};

use super::NetworkError;

/// `{ "data": ... }` envelope used by the Metro API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// A station as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities: Option<Vec<String>>,
}

/// A route as it appears on the wire, with its stations inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub id: String,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub coordinates: Vec<(f64, f64)>,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub operating_hours: String,
    #[serde(default)]
    pub description: String,
}

impl From<&Station> for StationRecord {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            latitude: station.coordinates.latitude,
            longitude: station.coordinates.longitude,
            lines: station.lines.clone(),
            address: station.address.clone(),
            facilities: (!station.facilities.is_empty()).then(|| station.facilities.clone()),
        }
    }
}

impl TryFrom<StationRecord> for Station {
    type Error = InvalidId;

    fn try_from(record: StationRecord) -> Result<Self, Self::Error> {
        Ok(Station {
            id: StationId::try_from(record.id)?,
            name: record.name,
            coordinates: Coordinates::new(record.latitude, record.longitude),
            lines: record.lines,
            address: record.address,
            facilities: record.facilities.unwrap_or_default(),
        })
    }
}

impl From<&Route> for RouteRecord {
    fn from(route: &Route) -> Self {
        Self {
            id: route.id.as_str().to_string(),
            name: route.name.clone(),
            color: route.color.clone(),
            stations: route
                .stations
                .iter()
                .map(|s| StationRecord::from(s.as_ref()))
                .collect(),
            coordinates: route
                .path
                .iter()
                .map(|c| (c.latitude, c.longitude))
                .collect(),
            frequency: route.frequency.clone(),
            operating_hours: route.operating_hours.clone(),
            description: route.description.clone(),
        }
    }
}

impl RouteRecord {
    /// Convert to a domain route, resolving each inline station through `lookup`.
    ///
    /// `lookup` returns the shared station record for an id. Stations it does
    /// not know are built from the route's own inline record.
    pub(crate) fn into_route<F>(self, lookup: F) -> Result<Route, NetworkError>
    where
        F: Fn(&StationId) -> Option<Arc<Station>>,
    {
        let id = LineId::try_from(self.id)?;

        let mut stations = Vec::with_capacity(self.stations.len());
        for record in self.stations {
            let station = match lookup(&StationId::parse(&record.id)?) {
                Some(shared) => shared,
                None => Arc::new(Station::try_from(record)?),
            };
            stations.push(station);
        }

        Ok(Route {
            id,
            name: self.name,
            color: self.color,
            stations,
            path: self
                .coordinates
                .into_iter()
                .map(|(lat, lon)| Coordinates::new(lat, lon))
                .collect(),
            frequency: self.frequency,
            operating_hours: self.operating_hours,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn union_record() -> StationRecord {
        StationRecord {
            id: "red-union-station".to_string(),
            name: "Union Station".to_string(),
            latitude: 34.0556,
            longitude: -118.2344,
            lines: vec!["red".to_string()],
            address: Some("800 N Alameda St, Los Angeles, CA 90012".to_string()),
            facilities: Some(vec!["parking".to_string()]),
        }
    }

    #[test]
    fn station_record_uses_camel_case_and_skips_missing_optionals() {
        let mut record = union_record();
        record.address = None;
        record.facilities = None;

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "red-union-station");
        assert_eq!(json["latitude"], 34.0556);
        assert!(json.get("address").is_none());
        assert!(json.get("facilities").is_none());
    }

    #[test]
    fn station_record_to_domain() {
        let station = Station::try_from(union_record()).unwrap();
        assert_eq!(station.id.as_str(), "red-union-station");
        assert_eq!(station.coordinates, Coordinates::new(34.0556, -118.2344));
        assert_eq!(station.facilities, vec!["parking".to_string()]);

        let back = StationRecord::from(&station);
        assert_eq!(back, union_record());
    }

    #[test]
    fn station_record_rejects_empty_id() {
        let mut record = union_record();
        record.id = String::new();
        assert!(Station::try_from(record).is_err());
    }

    #[test]
    fn route_record_parses_operating_hours_field() {
        let json = r##"{
            "id": "red-line",
            "name": "Red Line",
            "color": "#ff0000",
            "stations": [],
            "coordinates": [[34.0556, -118.2344]],
            "frequency": "Every 6-10 minutes",
            "operatingHours": "4:00 AM - 1:00 AM",
            "description": "Downtown to North Hollywood"
        }"##;

        let record: RouteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.operating_hours, "4:00 AM - 1:00 AM");
        assert_eq!(record.coordinates, vec![(34.0556, -118.2344)]);
    }

    fn red_line(stations: Vec<StationRecord>) -> RouteRecord {
        RouteRecord {
            id: "red-line".to_string(),
            name: "Red Line".to_string(),
            color: "#ff0000".to_string(),
            stations,
            coordinates: Vec::new(),
            frequency: String::new(),
            operating_hours: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn into_route_builds_unlisted_station_from_inline_record() {
        let route = red_line(vec![union_record()]).into_route(|_| None).unwrap();

        assert_eq!(route.len(), 1);
        assert_eq!(route.stations[0].id.as_str(), "red-union-station");
        assert_eq!(route.stations[0].name, "Union Station");
        assert_eq!(route.stations[0].lines, vec!["red".to_string()]);
    }

    #[test]
    fn into_route_prefers_shared_station() {
        let shared = Arc::new(Station::try_from(union_record()).unwrap());
        let route = red_line(vec![union_record()])
            .into_route(|id| (id == &shared.id).then(|| Arc::clone(&shared)))
            .unwrap();

        assert!(Arc::ptr_eq(&route.stations[0], &shared));
    }

    #[test]
    fn into_route_rejects_empty_station_id() {
        let mut record = union_record();
        record.id = String::new();

        let err = red_line(vec![record]).into_route(|_| None).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidId(_)));
    }
}
