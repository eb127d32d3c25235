//! Domain types for the metro route finder.
//!
//! Stations and lines are immutable reference data. Identifiers are
//! validated at construction, so code holding a `StationId` or `LineId`
//! can trust its shape.

mod ids;
mod route;
mod station;

pub use ids::{InvalidId, LineId, StationId};
pub use route::Route;
pub use station::{Coordinates, Station};
