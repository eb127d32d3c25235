//! Web layer for the metro route finder.
//!
//! Provides HTML pages for the search form and a JSON API over the
//! dataset and the route finder.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
