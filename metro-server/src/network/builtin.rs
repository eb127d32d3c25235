//! Built-in LA Metro sample dataset.
//!
//! Used when no dataset file or upstream API is configured, and as the
//! fallback when the upstream API is unreachable at startup.

use std::sync::Arc;

use crate::domain::{Coordinates, LineId, Route, Station, StationId};

use super::{NetworkError, TransitNetwork};

struct StationRow {
    id: &'static str,
    name: &'static str,
    lat: f64,
    lon: f64,
    lines: &'static [&'static str],
    address: &'static str,
    facilities: &'static [&'static str],
}

struct LineRow {
    /// Short key matched against `Station::lines`.
    key: &'static str,
    id: &'static str,
    name: &'static str,
    color: &'static str,
    path: &'static [(f64, f64)],
    frequency: &'static str,
    operating_hours: &'static str,
    description: &'static str,
}

// Stops served by several lines have one record per line. `red-7th-street`
// is also tagged with the purple, blue and expo keys, which makes it the
// shared station between the Red Line and the other lines.
const STATIONS: &[StationRow] = &[
    StationRow {
        id: "red-union-station",
        name: "Union Station",
        lat: 34.0556,
        lon: -118.2344,
        lines: &["red"],
        address: "800 N Alameda St, Los Angeles, CA 90012",
        facilities: &["parking", "bike_racks", "restrooms"],
    },
    StationRow {
        id: "red-civic-center",
        name: "Civic Center/Grand Park",
        lat: 34.0550,
        lon: -118.2430,
        lines: &["red"],
        address: "101 S Hill St, Los Angeles, CA 90012",
        facilities: &[],
    },
    StationRow {
        id: "red-pershing-square",
        name: "Pershing Square",
        lat: 34.0490,
        lon: -118.2500,
        lines: &["red"],
        address: "532 S Olive St, Los Angeles, CA 90013",
        facilities: &[],
    },
    StationRow {
        id: "red-7th-street",
        name: "7th Street/Metro Center",
        lat: 34.0470,
        lon: -118.2580,
        lines: &["red", "purple", "blue", "expo"],
        address: "700 S Flower St, Los Angeles, CA 90017",
        facilities: &[],
    },
    StationRow {
        id: "red-westlake",
        name: "Westlake/MacArthur Park",
        lat: 34.0570,
        lon: -118.2750,
        lines: &["red"],
        address: "660 S Westlake Ave, Los Angeles, CA 90057",
        facilities: &[],
    },
    StationRow {
        id: "red-wilshire-vermont",
        name: "Wilshire/Vermont",
        lat: 34.0620,
        lon: -118.2910,
        lines: &["red"],
        address: "3010 Wilshire Blvd, Los Angeles, CA 90010",
        facilities: &[],
    },
    StationRow {
        id: "red-wilshire-western",
        name: "Wilshire/Western",
        lat: 34.0620,
        lon: -118.3080,
        lines: &["red"],
        address: "3775 Wilshire Blvd, Los Angeles, CA 90010",
        facilities: &[],
    },
    StationRow {
        id: "red-vermont-sunset",
        name: "Vermont/Sunset",
        lat: 34.0980,
        lon: -118.2910,
        lines: &["red"],
        address: "1500 N Vermont Ave, Los Angeles, CA 90027",
        facilities: &[],
    },
    StationRow {
        id: "red-vermont-santa-monica",
        name: "Vermont/Santa Monica",
        lat: 34.0890,
        lon: -118.2910,
        lines: &["red"],
        address: "1400 N Vermont Ave, Los Angeles, CA 90027",
        facilities: &[],
    },
    StationRow {
        id: "red-hollywood-western",
        name: "Hollywood/Western",
        lat: 34.1020,
        lon: -118.3080,
        lines: &["red"],
        address: "5450 Hollywood Blvd, Los Angeles, CA 90027",
        facilities: &[],
    },
    StationRow {
        id: "red-hollywood-vine",
        name: "Hollywood/Vine",
        lat: 34.1020,
        lon: -118.3250,
        lines: &["red"],
        address: "6250 Hollywood Blvd, Los Angeles, CA 90028",
        facilities: &[],
    },
    StationRow {
        id: "red-hollywood-highland",
        name: "Hollywood/Highland",
        lat: 34.1020,
        lon: -118.3390,
        lines: &["red"],
        address: "6801 Hollywood Blvd, Los Angeles, CA 90028",
        facilities: &[],
    },
    StationRow {
        id: "red-universal-city",
        name: "Universal City/Studio City",
        lat: 34.1380,
        lon: -118.3590,
        lines: &["red"],
        address: "3900 Lankershim Blvd, Universal City, CA 91608",
        facilities: &[],
    },
    StationRow {
        id: "red-north-hollywood",
        name: "North Hollywood",
        lat: 34.1680,
        lon: -118.3770,
        lines: &["red"],
        address: "5250 Lankershim Blvd, North Hollywood, CA 91601",
        facilities: &[],
    },
    StationRow {
        id: "purple-union-station",
        name: "Union Station",
        lat: 34.0556,
        lon: -118.2344,
        lines: &["purple"],
        address: "800 N Alameda St, Los Angeles, CA 90012",
        facilities: &[],
    },
    StationRow {
        id: "purple-civic-center",
        name: "Civic Center/Grand Park",
        lat: 34.0550,
        lon: -118.2430,
        lines: &["purple"],
        address: "101 S Hill St, Los Angeles, CA 90012",
        facilities: &[],
    },
    StationRow {
        id: "purple-pershing-square",
        name: "Pershing Square",
        lat: 34.0490,
        lon: -118.2500,
        lines: &["purple"],
        address: "532 S Olive St, Los Angeles, CA 90013",
        facilities: &[],
    },
    StationRow {
        id: "purple-7th-street",
        name: "7th Street/Metro Center",
        lat: 34.0470,
        lon: -118.2580,
        lines: &["purple"],
        address: "700 S Flower St, Los Angeles, CA 90017",
        facilities: &[],
    },
    StationRow {
        id: "purple-wilshire-western",
        name: "Wilshire/Western",
        lat: 34.0620,
        lon: -118.3080,
        lines: &["purple"],
        address: "3775 Wilshire Blvd, Los Angeles, CA 90010",
        facilities: &[],
    },
    StationRow {
        id: "purple-wilshire-normandie",
        name: "Wilshire/Normandie",
        lat: 34.0620,
        lon: -118.3250,
        lines: &["purple"],
        address: "3500 Wilshire Blvd, Los Angeles, CA 90010",
        facilities: &[],
    },
    StationRow {
        id: "purple-wilshire-vermont",
        name: "Wilshire/Vermont",
        lat: 34.0620,
        lon: -118.2910,
        lines: &["purple"],
        address: "3010 Wilshire Blvd, Los Angeles, CA 90010",
        facilities: &[],
    },
    StationRow {
        id: "blue-7th-street",
        name: "7th Street/Metro Center",
        lat: 34.0470,
        lon: -118.2580,
        lines: &["blue"],
        address: "700 S Flower St, Los Angeles, CA 90017",
        facilities: &[],
    },
    StationRow {
        id: "blue-pico",
        name: "Pico",
        lat: 34.0450,
        lon: -118.2580,
        lines: &["blue"],
        address: "1200 S Flower St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-grand",
        name: "Grand/LATTC",
        lat: 34.0430,
        lon: -118.2580,
        lines: &["blue"],
        address: "1201 S Grand Ave, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-san-pedro",
        name: "San Pedro",
        lat: 34.0410,
        lon: -118.2580,
        lines: &["blue"],
        address: "1400 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-washington",
        name: "Washington",
        lat: 34.0390,
        lon: -118.2580,
        lines: &["blue"],
        address: "1600 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-vernon",
        name: "Vernon",
        lat: 34.0370,
        lon: -118.2580,
        lines: &["blue"],
        address: "1800 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-slauson",
        name: "Slauson",
        lat: 34.0350,
        lon: -118.2580,
        lines: &["blue"],
        address: "2000 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-florence",
        name: "Florence",
        lat: 34.0330,
        lon: -118.2580,
        lines: &["blue"],
        address: "2200 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-firestone",
        name: "Firestone",
        lat: 34.0310,
        lon: -118.2580,
        lines: &["blue"],
        address: "2400 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-103rd-watts",
        name: "103rd Street/Watts Towers",
        lat: 34.0290,
        lon: -118.2580,
        lines: &["blue"],
        address: "2600 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-rosa-parks",
        name: "Rosa Parks",
        lat: 34.0270,
        lon: -118.2580,
        lines: &["blue"],
        address: "2800 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-imperial-wilmington",
        name: "Imperial/Wilmington",
        lat: 34.0250,
        lon: -118.2580,
        lines: &["blue"],
        address: "3000 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-compton",
        name: "Compton",
        lat: 34.0230,
        lon: -118.2580,
        lines: &["blue"],
        address: "3200 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-artesia",
        name: "Artesia",
        lat: 34.0210,
        lon: -118.2580,
        lines: &["blue"],
        address: "3400 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-del-amo",
        name: "Del Amo",
        lat: 34.0190,
        lon: -118.2580,
        lines: &["blue"],
        address: "3600 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-wardlow",
        name: "Wardlow",
        lat: 34.0170,
        lon: -118.2580,
        lines: &["blue"],
        address: "3800 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-willowbrook",
        name: "Willowbrook",
        lat: 34.0150,
        lon: -118.2580,
        lines: &["blue"],
        address: "4000 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
    StationRow {
        id: "blue-long-beach",
        name: "Long Beach",
        lat: 34.0130,
        lon: -118.2580,
        lines: &["blue"],
        address: "4200 S San Pedro St, Los Angeles, CA 90015",
        facilities: &[],
    },
];

const LINES: &[LineRow] = &[
    LineRow {
        key: "red",
        id: "red-line",
        name: "Red Line",
        color: "#ff0000",
        path: &[
            (34.0556, -118.2344),
            (34.0550, -118.2430),
            (34.0490, -118.2500),
            (34.0470, -118.2580),
            (34.0570, -118.2750),
            (34.0620, -118.2910),
            (34.0620, -118.3080),
            (34.0980, -118.2910),
            (34.0890, -118.2910),
            (34.1020, -118.3080),
            (34.1020, -118.3250),
            (34.1020, -118.3390),
            (34.1380, -118.3590),
            (34.1680, -118.3770),
        ],
        frequency: "Every 6-10 minutes",
        operating_hours: "4:00 AM - 1:00 AM",
        description: "Connects Downtown LA to North Hollywood via Hollywood",
    },
    LineRow {
        key: "purple",
        id: "purple-line",
        name: "Purple Line",
        color: "#800080",
        path: &[
            (34.0556, -118.2344),
            (34.0550, -118.2430),
            (34.0490, -118.2500),
            (34.0470, -118.2580),
            (34.0620, -118.3080),
            (34.0620, -118.3250),
            (34.0620, -118.2910),
        ],
        frequency: "Every 6-10 minutes",
        operating_hours: "4:00 AM - 1:00 AM",
        description: "Connects Downtown LA to Koreatown via Wilshire Boulevard",
    },
    LineRow {
        key: "blue",
        id: "blue-line",
        name: "Blue Line",
        color: "#0066cc",
        path: &[
            (34.0470, -118.2580),
            (34.0450, -118.2580),
            (34.0430, -118.2580),
            (34.0410, -118.2580),
            (34.0390, -118.2580),
            (34.0370, -118.2580),
            (34.0350, -118.2580),
            (34.0330, -118.2580),
            (34.0310, -118.2580),
            (34.0290, -118.2580),
            (34.0270, -118.2580),
            (34.0250, -118.2580),
            (34.0230, -118.2580),
            (34.0210, -118.2580),
            (34.0190, -118.2580),
            (34.0170, -118.2580),
            (34.0150, -118.2580),
            (34.0130, -118.2580),
        ],
        frequency: "Every 6-10 minutes",
        operating_hours: "4:00 AM - 1:00 AM",
        description: "Connects Downtown LA to Long Beach",
    },
];

/// Build the LA Metro sample network (Red, Purple and Blue lines).
///
/// Each line's station sequence is every station tagged with the line's
/// key, in dataset order.
pub fn la_metro() -> Result<TransitNetwork, NetworkError> {
    let stations = STATIONS
        .iter()
        .map(|row| {
            Ok(Arc::new(Station {
                id: StationId::parse(row.id)?,
                name: row.name.to_string(),
                coordinates: Coordinates::new(row.lat, row.lon),
                lines: row.lines.iter().map(|l| l.to_string()).collect(),
                address: Some(row.address.to_string()),
                facilities: row.facilities.iter().map(|f| f.to_string()).collect(),
            }))
        })
        .collect::<Result<Vec<_>, NetworkError>>()?;

    let routes = LINES
        .iter()
        .map(|row| {
            Ok(Route {
                id: LineId::parse(row.id)?,
                name: row.name.to_string(),
                color: row.color.to_string(),
                stations: stations
                    .iter()
                    .filter(|s| s.serves_line(row.key))
                    .cloned()
                    .collect(),
                path: row
                    .path
                    .iter()
                    .map(|&(lat, lon)| Coordinates::new(lat, lon))
                    .collect(),
                frequency: row.frequency.to_string(),
                operating_hours: row.operating_hours.to_string(),
                description: row.description.to_string(),
            })
        })
        .collect::<Result<Vec<_>, NetworkError>>()?;

    TransitNetwork::new(stations, routes)
}
