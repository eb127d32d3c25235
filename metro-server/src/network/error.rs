//! Dataset construction errors.

use std::path::PathBuf;

use crate::domain::{InvalidId, LineId, StationId};

/// Errors raised while building or loading a transit network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Two station records share an identifier
    #[error("duplicate station id: {0}")]
    DuplicateStation(StationId),

    /// Two routes share an identifier
    #[error("duplicate route id: {0}")]
    DuplicateRoute(LineId),

    /// A route lists a station that is not in the station list
    #[error("route {route} references unknown station {station}")]
    UnknownStation { route: LineId, station: StationId },

    /// An identifier failed validation
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// Dataset file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dataset JSON could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
