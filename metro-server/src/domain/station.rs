//! Station records.

use super::StationId;

/// A point on the map, in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A station record.
///
/// A physical stop served by several lines appears once per line, each
/// record with its own identifier (e.g. `red-union-station` and
/// `purple-union-station`). Route membership is always decided by
/// identifier, never by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,

    /// Display name, e.g. "Union Station".
    pub name: String,

    pub coordinates: Coordinates,

    /// Short keys of the lines this record belongs to (e.g. "red", "expo").
    pub lines: Vec<String>,

    pub address: Option<String>,

    /// Facility tags such as "parking" or "restrooms".
    pub facilities: Vec<String>,
}

impl Station {
    /// Create a station with no address or facilities.
    pub fn new(id: StationId, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id,
            name: name.into(),
            coordinates,
            lines: Vec::new(),
            address: None,
            facilities: Vec::new(),
        }
    }

    /// Whether the display name contains `fragment`, ignoring case.
    ///
    /// An empty fragment matches every station.
    pub fn name_matches(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }

    /// Whether this record is tagged with the given line key.
    pub fn serves_line(&self, key: &str) -> bool {
        self.lines.iter().any(|l| l == key)
    }
}
