//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Route;
use crate::network::TransitNetwork;
use crate::planner::SearchResult;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Distinct station names, in dataset order, for the suggestion list.
    pub station_names: Vec<String>,
}

/// About page listing the lines.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub lines: Vec<LineView>,
    pub loaded_at: String,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route search results fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub origin: String,
    pub destination: String,
    pub results: Vec<ResultView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

impl IndexTemplate {
    /// Build from a network, collapsing per-line duplicate records by name.
    pub fn from_network(network: &TransitNetwork) -> Self {
        let mut station_names: Vec<String> = Vec::new();
        for station in network.stations() {
            if !station_names.contains(&station.name) {
                station_names.push(station.name.clone());
            }
        }
        Self { station_names }
    }
}

/// Line view model for templates.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: String,
    pub color: String,
    pub description: String,
    pub frequency: String,
    pub operating_hours: String,
    pub stations: Vec<String>,
}

impl LineView {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            name: route.name.clone(),
            color: route.color.clone(),
            description: route.description.clone(),
            frequency: route.frequency.clone(),
            operating_hours: route.operating_hours.clone(),
            stations: route.stations.iter().map(|s| s.name.clone()).collect(),
        }
    }

    /// e.g. "Union Station → North Hollywood"
    pub fn terminals(&self) -> String {
        match (self.stations.first(), self.stations.last()) {
            (Some(first), Some(last)) => format!("{first} → {last}"),
            _ => String::new(),
        }
    }
}

/// Search result view model for templates.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub route_name: String,
    pub route_color: String,
    pub origin_name: String,
    pub destination_name: String,
    pub transfer_names: Vec<String>,
    pub total_stations: usize,
    pub estimated_time: String,
}

impl ResultView {
    /// Create from a search result.
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            route_name: result.route.name.clone(),
            route_color: result.route.color.clone(),
            origin_name: result.origin.name.clone(),
            destination_name: result.destination.name.clone(),
            transfer_names: result.transfers.iter().map(|s| s.name.clone()).collect(),
            total_stations: result.total_stations,
            estimated_time: result.estimated_time(),
        }
    }

    pub fn has_transfer(&self) -> bool {
        !self.transfer_names.is_empty()
    }

    /// "Transfer at: ..." line.
    pub fn transfer_summary(&self) -> String {
        format!("Transfer at: {}", self.transfer_names.join(", "))
    }
}
