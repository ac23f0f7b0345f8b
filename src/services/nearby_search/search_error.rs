use std::fmt;

use axum::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    services::maps_client::types::maps_service_error::MapsServiceError,
    types::{place_type::UnknownPlaceType, price_level::UnknownPriceLevel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Coordinate::Latitude => f.write_str("latitude"),
            Coordinate::Longitude => f.write_str("longitude"),
        }
    }
}

/// Every way a nearby search can fail. The `Display` text is what callers see,
/// so provider details stay in the source chain.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid {0}")]
    MissingCoordinate(Coordinate),

    #[error("Invalid location: {0}")]
    CoordinateOutOfRange(ValidationErrors),

    #[error(transparent)]
    InvalidPriceLevel(#[from] UnknownPriceLevel),

    #[error(transparent)]
    UnknownPlaceType(#[from] UnknownPlaceType),

    #[error("API Key is required")]
    MissingCredential,

    #[error("Failed to create maps client")]
    ProviderClient(#[source] MapsServiceError),

    #[error("Failed to search nearby places")]
    ProviderCall(#[source] MapsServiceError),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::MissingCoordinate(_) | SearchError::CoordinateOutOfRange(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MapsServiceError> for SearchError {
    fn from(e: MapsServiceError) -> Self {
        match e {
            MapsServiceError::Client(_) => SearchError::ProviderClient(e),
            _ => SearchError::ProviderCall(e),
        }
    }
}
