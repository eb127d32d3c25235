//! Route finder.
//!
//! Resolves free-text origin and destination fragments to stations and
//! enumerates direct and single-transfer itineraries between them. The
//! search runs synchronously over an immutable network snapshot.

mod config;
mod finder;
mod rank;

#[cfg(test)]
mod finder_tests;

pub use config::FinderConfig;
pub use finder::{RouteFinder, SearchResult};
pub use rank::rank_results;
