//! Unit tests for the route finder.

use std::sync::Arc;

use super::*;
use crate::domain::{Coordinates, LineId, Route, Station, StationId};
use crate::network::{TransitNetwork, la_metro};

fn sample() -> TransitNetwork {
    la_metro().unwrap()
}

fn find(origin: &str, destination: &str) -> Vec<SearchResult> {
    let network = sample();
    let config = FinderConfig::default();
    RouteFinder::new(&network, &config).find_routes(origin, destination)
}

fn station(net: &TransitNetwork, id: &str) -> Arc<Station> {
    Arc::clone(net.station(&StationId::parse(id).unwrap()).unwrap())
}

fn route_ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.route.id.as_str()).collect()
}

fn make_station(id: &str, name: &str) -> Arc<Station> {
    Arc::new(Station::new(
        StationId::parse(id).unwrap(),
        name,
        Coordinates::new(34.0, -118.0),
    ))
}

fn make_route(id: &str, stations: &[&Arc<Station>]) -> Route {
    Route {
        id: LineId::parse(id).unwrap(),
        name: id.to_string(),
        color: "#123456".to_string(),
        stations: stations.iter().map(|s| Arc::clone(s)).collect(),
        path: Vec::new(),
        frequency: String::new(),
        operating_hours: String::new(),
        description: String::new(),
    }
}

#[test]
fn union_to_hollywood_highland_is_direct_on_red() {
    let results = find("Union", "Hollywood/High");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(result.is_direct());
    assert_eq!(result.route.id.as_str(), "red-line");
    assert_eq!(result.route.name, "Red Line");
    assert_eq!(result.route.color, "#ff0000");
    assert_eq!(result.origin.id.as_str(), "red-union-station");
    assert_eq!(result.destination.id.as_str(), "red-hollywood-highland");
    assert_eq!(result.total_stations, 12);
    assert_eq!(result.estimated_time(), "33 min");
}

#[test]
fn resolution_ignores_case() {
    let results = find("union", "HOLLYWOOD/HIGH");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].total_stations, 12);
}

#[test]
fn direction_does_not_change_cost() {
    let results = find("Hollywood/High", "Union");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].total_stations, 12);
    assert_eq!(results[0].estimated_minutes, 33);
    assert_eq!(results[0].origin.name, "Hollywood/Highland");
}

#[test]
fn wilshire_western_to_7th_street() {
    let results = find("Wilshire/Western", "7th Street");

    // Both fragments resolve to red records; only the Red Line carries both.
    assert_eq!(route_ids(&results), vec!["red-line", "red-line", "red-line"]);

    let direct = &results[0];
    assert!(direct.is_direct());
    assert_eq!(direct.total_stations, 4);
    assert_eq!(direct.estimated_time(), "9 min");

    // Red -> Purple, then Red -> Blue, both changing at the shared 7th Street record.
    let purple = &results[1];
    assert_eq!(purple.transfers.len(), 1);
    assert_eq!(purple.transfers[0].id.as_str(), "red-7th-street");
    assert_eq!(purple.total_stations, 14 + 8);
    assert_eq!(purple.estimated_time(), "44 min");

    let blue = &results[2];
    assert_eq!(blue.transfers[0].id.as_str(), "red-7th-street");
    assert_eq!(blue.total_stations, 14 + 19);
    assert_eq!(blue.estimated_time(), "66 min");
}

#[test]
fn direct_result_per_line_sharing_both_records() {
    // red-7th-street is on red, purple and blue, so every line carries it.
    let results = find("7th Street", "7th Street");

    let direct: Vec<_> = results.iter().filter(|r| r.is_direct()).collect();
    assert_eq!(direct.len(), 3);
    assert_eq!(
        direct.iter().map(|r| r.route.id.as_str()).collect::<Vec<_>>(),
        vec!["red-line", "purple-line", "blue-line"]
    );
    for r in &direct {
        assert_eq!(r.total_stations, 1);
        assert_eq!(r.estimated_time(), "0 min");
    }

    // Every ordered pair of distinct lines also yields a transfer result.
    assert_eq!(results.len() - direct.len(), 6);
}

#[test]
fn union_to_long_beach_needs_transfer() {
    let results = find("Union", "Long Beach");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(!result.is_direct());
    assert_eq!(result.route.id.as_str(), "red-line");
    assert_eq!(result.transfers[0].name, "7th Street/Metro Center");
    assert_eq!(result.total_stations, 33);
    assert_eq!(result.estimated_time(), "66 min");
}

#[test]
fn unknown_fragment_returns_nothing() {
    assert!(find("Zzzzz", "Union").is_empty());
    assert!(find("Union", "Zzzzz").is_empty());
    assert!(find("Zzzzz", "Zzzzz").is_empty());
}

#[test]
fn same_station_is_single_stop() {
    let results = find("Pico", "Pico");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].route.id.as_str(), "blue-line");
    assert_eq!(results[0].total_stations, 1);
    assert_eq!(results[0].estimated_minutes, 0);
    assert_eq!(results[0].estimated_time(), "0 min");
}

#[test]
fn same_stop_under_different_records_has_no_direct_result() {
    let net = sample();
    let config = FinderConfig::default();
    let finder = RouteFinder::new(&net, &config);

    let red_union = station(&net, "red-union-station");
    let purple_union = station(&net, "purple-union-station");

    let results = finder.find_between(&red_union, &purple_union);
    assert!(results.iter().all(|r| !r.is_direct()));

    // The only connection is Red -> Purple via the shared 7th Street record.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].transfers[0].id.as_str(), "red-7th-street");
}

#[test]
fn first_shared_station_is_the_transfer() {
    let a = make_station("a", "Alpha");
    let b = make_station("b", "Bravo");
    let c = make_station("c", "Charlie");
    let d = make_station("d", "Delta");
    let e = make_station("e", "Echo");

    // Lines share both b and c; b comes first on the boarding line.
    let first = make_route("first", &[&a, &b, &c]);
    let second = make_route("second", &[&c, &b, &d, &e]);
    let net = TransitNetwork::new(vec![a, b, c, d, e], vec![first, second]).unwrap();
    let config = FinderConfig::default();

    let results = RouteFinder::new(&net, &config).find_routes("Alpha", "Echo");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].transfers.len(), 1);
    assert_eq!(results[0].transfers[0].name, "Bravo");
    assert_eq!(results[0].total_stations, 7);
    assert_eq!(results[0].estimated_minutes, 14);
}

#[test]
fn lines_without_shared_station_are_skipped() {
    let a = make_station("a", "Alpha");
    let b = make_station("b", "Bravo");
    let c = make_station("c", "Charlie");
    let d = make_station("d", "Delta");

    let first = make_route("first", &[&a, &b]);
    let second = make_route("second", &[&c, &d]);
    let net = TransitNetwork::new(vec![a, b, c, d], vec![first, second]).unwrap();
    let config = FinderConfig::default();

    assert!(RouteFinder::new(&net, &config).find_routes("Alpha", "Delta").is_empty());
}

#[test]
fn direct_before_longer_transfer_and_ties_keep_order() {
    let a = make_station("a", "Alpha");
    let b = make_station("b", "Bravo");
    let c = make_station("c", "Charlie");

    // Two identical lines: direct on each, and a transfer each way.
    let one = make_route("one", &[&a, &b, &c]);
    let two = make_route("two", &[&a, &b, &c]);
    let net = TransitNetwork::new(vec![a, b, c], vec![one, two]).unwrap();
    let config = FinderConfig::default();

    let results = RouteFinder::new(&net, &config).find_routes("Alpha", "Charlie");

    assert_eq!(route_ids(&results), vec!["one", "two", "one", "two"]);
    assert!(results[0].is_direct() && results[1].is_direct());
    assert_eq!(results[0].total_stations, 3);
    assert_eq!(results[2].total_stations, 6);
    assert_eq!(results[2].transfers[0].name, "Alpha");
}

#[test]
fn custom_config_changes_estimates() {
    let net = sample();
    let config = FinderConfig::new(5, 1);
    let finder = RouteFinder::new(&net, &config);

    let direct = finder.find_routes("Union", "Hollywood/High");
    assert_eq!(direct[0].estimated_time(), "55 min");

    let transfer = finder.find_routes("Union", "Long Beach");
    assert_eq!(transfer[0].estimated_time(), "33 min");
}

mod properties {
    use proptest::prelude::*;
    use proptest::sample::Index;

    use super::*;

    proptest! {
        /// Two stations on the same line always yield a direct result on that line.
        #[test]
        fn co_located_stations_have_direct_result(
            line in 0usize..3,
            i in any::<Index>(),
            j in any::<Index>(),
        ) {
            let net = sample();
            let config = FinderConfig::default();
            let route = Arc::clone(&net.routes()[line]);
            let i = i.index(route.len());
            let j = j.index(route.len());

            let results = RouteFinder::new(&net, &config)
                .find_between(&route.stations[i], &route.stations[j]);

            let direct = results
                .iter()
                .find(|r| r.is_direct() && r.route.id == route.id);
            prop_assert!(direct.is_some());
            prop_assert_eq!(direct.unwrap().total_stations, i.abs_diff(j) + 1);
        }

        /// Estimates follow the per-kind formula and results are sorted.
        #[test]
        fn estimates_and_ordering(a in any::<Index>(), b in any::<Index>()) {
            let net = sample();
            let config = FinderConfig::default();
            let from = Arc::clone(a.get(net.stations()));
            let to = Arc::clone(b.get(net.stations()));

            let results = RouteFinder::new(&net, &config).find_between(&from, &to);

            for r in &results {
                if r.is_direct() {
                    prop_assert_eq!(r.estimated_minutes, (r.total_stations - 1) * 3);
                } else {
                    prop_assert_eq!(r.transfers.len(), 1);
                    prop_assert_eq!(r.estimated_minutes, r.total_stations * 2);
                }
                prop_assert_eq!(r.estimated_time(), format!("{} min", r.estimated_minutes));
            }

            for pair in results.windows(2) {
                prop_assert!(pair[0].total_stations <= pair[1].total_stations);
            }
        }

        /// Fragments that match no station name never produce results.
        #[test]
        fn unmatched_fragment_is_empty(fragment in "[qxz]{5,8}") {
            let net = sample();
            let config = FinderConfig::default();
            let finder = RouteFinder::new(&net, &config);

            prop_assert!(finder.find_routes(&fragment, "Union").is_empty());
            prop_assert!(finder.find_routes("Union", &fragment).is_empty());
        }
    }
}
