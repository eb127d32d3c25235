//! The metro dataset: stations, routes and where they come from.
//!
//! A [`TransitNetwork`] is an immutable, validated snapshot. It can be
//! built from the built-in LA Metro sample, a JSON file, or records fetched
//! from the upstream Metro API.

mod builtin;
mod error;
mod file;
mod records;
mod transit;

pub use builtin::la_metro;
pub use error::NetworkError;
pub use file::{from_json_str, load_from_path};
pub use records::{DataEnvelope, RouteRecord, StationRecord};
pub use transit::TransitNetwork;
