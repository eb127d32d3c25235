//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::domain::{LineId, StationId};
use crate::network::{DataEnvelope, RouteRecord, StationRecord};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Default number of station search results.
const DEFAULT_STATION_LIMIT: usize = 10;

/// Upper bound on station search results.
const MAX_STATION_LIMIT: usize = 50;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/routes", get(list_routes))
        .route("/api/routes/search", get(search_routes))
        .route("/api/routes/:id", get(get_route))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/search", get(search_stations))
        .route("/api/stations/suggest", get(suggest_stations))
        .route("/api/stations/:id", get(get_station))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> Response {
    let finder = state.data.snapshot().await;
    askama_axum::into_response(&IndexTemplate::from_network(finder.network()))
}

/// About page.
async fn about_page(State(state): State<AppState>) -> Response {
    let finder = state.data.snapshot().await;
    let network = finder.network();

    let template = AboutTemplate {
        lines: network
            .routes()
            .iter()
            .map(|r| LineView::from_route(r))
            .collect(),
        loaded_at: network.loaded_at().format("%Y-%m-%d %H:%M UTC").to_string(),
    };
    askama_axum::into_response(&template)
}

/// All lines, in upstream record format.
async fn list_routes(State(state): State<AppState>) -> Json<DataEnvelope<Vec<RouteRecord>>> {
    let finder = state.data.snapshot().await;
    let data = finder
        .network()
        .routes()
        .iter()
        .map(|r| RouteRecord::from(r.as_ref()))
        .collect();

    Json(DataEnvelope { data })
}

/// A single line by id.
async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataEnvelope<RouteRecord>>, AppError> {
    let not_found = || AppError::NotFound {
        message: format!("Route not found: {id}"),
    };
    let line_id = LineId::parse(&id).map_err(|_| not_found())?;

    let finder = state.data.snapshot().await;
    let route = finder.network().route(&line_id).ok_or_else(not_found)?;

    Ok(Json(DataEnvelope {
        data: RouteRecord::from(route.as_ref()),
    }))
}

/// All stations, in upstream record format.
async fn list_stations(State(state): State<AppState>) -> Json<DataEnvelope<Vec<StationRecord>>> {
    let finder = state.data.snapshot().await;
    let data = finder
        .network()
        .stations()
        .iter()
        .map(|s| StationRecord::from(s.as_ref()))
        .collect();

    Json(DataEnvelope { data })
}

/// A single station by id.
async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataEnvelope<StationRecord>>, AppError> {
    let not_found = || AppError::NotFound {
        message: format!("Station not found: {id}"),
    };
    let station_id = StationId::parse(&id).map_err(|_| not_found())?;

    let finder = state.data.snapshot().await;
    let station = finder.network().station(&station_id).ok_or_else(not_found)?;

    Ok(Json(DataEnvelope {
        data: StationRecord::from(station.as_ref()),
    }))
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_STATION_LIMIT)
        .min(MAX_STATION_LIMIT);
    let finder = state.data.snapshot().await;

    let stations = finder
        .network()
        .search_stations(&req.q, limit)
        .into_iter()
        .map(|s| StationSummary::from_station(s))
        .collect();

    Json(StationSearchResponse { stations })
}

/// Stations matching either half of a partially filled search form.
async fn suggest_stations(
    State(state): State<AppState>,
    Query(req): Query<SuggestStationsRequest>,
) -> Json<StationSearchResponse> {
    let finder = state.data.snapshot().await;

    let stations = finder
        .network()
        .suggest_stations(&req.origin, &req.destination)
        .into_iter()
        .map(|s| StationSummary::from_station(s))
        .collect();

    Json(StationSearchResponse { stations })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Search for routes between two station name fragments.
async fn search_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteSearchRequest>,
) -> Result<Response, AppError> {
    // Blank input is rejected, but the search itself uses the text as typed.
    if req.origin.trim().is_empty() || req.destination.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Both origin and destination are required".to_string(),
        });
    }
    let (origin, destination) = (req.origin.as_str(), req.destination.as_str());

    let finder = state.data.snapshot().await;
    let results = finder.find_routes(origin, destination).await;
    debug!(origin, destination, results = results.len(), "route search");

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteResultsTemplate {
            origin: origin.to_string(),
            destination: destination.to_string(),
            results: results.iter().map(ResultView::from_result).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let results = results.iter().map(SearchResultDto::from_result).collect();

        Ok(Json(RouteSearchResponse { results }).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
