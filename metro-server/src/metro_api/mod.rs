//! Upstream Metro API client.
//!
//! Fetches the route and station lists the dataset is built from. The
//! server uses it at start-up and to refresh the dataset
//! periodically, falling back to the built-in sample when it is
//! unavailable.

mod client;
mod error;

pub use client::{MetroClient, MetroClientConfig};
pub use error::MetroApiError;
