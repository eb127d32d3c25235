//! Metro lines.

use std::sync::Arc;

use super::{Coordinates, LineId, Station, StationId};

/// A metro line with its ordered station sequence.
///
/// The order of `stations` is the physical order along the line. The
/// remaining fields are display-only metadata.
#[derive(Debug, Clone)]
pub struct Route {
    pub id: LineId,

    /// Display name, e.g. "Red Line".
    pub name: String,

    /// CSS color, e.g. "#ff0000".
    pub color: String,

    pub stations: Vec<Arc<Station>>,

    /// Polyline drawn on the map.
    pub path: Vec<Coordinates>,

    pub frequency: String,
    pub operating_hours: String,
    pub description: String,
}

impl Route {
    /// Index of the station with the given id in this line's sequence.
    pub fn position_of(&self, id: &StationId) -> Option<usize> {
        self.stations.iter().position(|s| &s.id == id)
    }

    /// Whether the station with the given id is on this line.
    pub fn contains(&self, id: &StationId) -> bool {
        self.position_of(id).is_some()
    }

    /// Number of stations on the line.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the line has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations of this line that also appear on `other`, in this line's order.
    pub fn shared_stations<'a>(
        &'a self,
        other: &'a Route,
    ) -> impl Iterator<Item = &'a Arc<Station>> + 'a {
        self.stations.iter().filter(|s| other.contains(&s.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, name: &str) -> Arc<Station> {
        Arc::new(Station::new(
            StationId::parse(id).unwrap(),
            name,
            Coordinates::new(34.0, -118.0),
        ))
    }

    fn route(id: &str, stations: Vec<Arc<Station>>) -> Route {
        Route {
            id: LineId::parse(id).unwrap(),
            name: id.to_string(),
            color: "#000000".to_string(),
            stations,
            path: Vec::new(),
            frequency: String::new(),
            operating_hours: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn position_of_uses_identifier() {
        let a = station("a", "Alpha");
        let b = station("b", "Beta");
        let r = route("line", vec![a.clone(), b.clone()]);

        assert_eq!(r.position_of(&a.id), Some(0));
        assert_eq!(r.position_of(&b.id), Some(1));

        // Same name, different record: not on the line.
        let other_alpha = station("other-a", "Alpha");
        assert_eq!(r.position_of(&other_alpha.id), None);
        assert!(!r.contains(&other_alpha.id));
    }

    #[test]
    fn shared_stations_in_own_order() {
        let a = station("a", "A");
        let b = station("b", "B");
        let c = station("c", "C");
        let d = station("d", "D");

        let first = route("first", vec![a.clone(), b.clone(), c.clone()]);
        let second = route("second", vec![d, c.clone(), b.clone()]);

        let shared: Vec<_> = first.shared_stations(&second).map(|s| s.id.clone()).collect();
        assert_eq!(shared, vec![b.id.clone(), c.id.clone()]);

        let shared: Vec<_> = second.shared_stations(&first).map(|s| s.id.clone()).collect();
        assert_eq!(shared, vec![c.id.clone(), b.id.clone()]);
    }

    #[test]
    fn len_and_is_empty() {
        let r = route("empty", Vec::new());
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);

        let r = route("one", vec![station("a", "A")]);
        assert!(!r.is_empty());
        assert_eq!(r.len(), 1);
    }
}
