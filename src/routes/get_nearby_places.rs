use std::error::Error;

use crate::{
    services::nearby_search::search_query::RawQueryParams,
    types::app_state::AppState,
    utils::{app_error::AppError, query_params::QueryParams},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use tracing::{error, warn};

#[cfg_attr(test, debug_handler)]
pub async fn get_nearby_places(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<RawQueryParams>,
) -> Result<Response, AppError> {
    let places = state.nearby_search.search(params).await.map_err(|e| {
        if e.status_code().is_client_error() {
            warn!("Rejected nearby search: {}", e);
        } else {
            match e.source() {
                Some(source) => error!("{}: {}", e, source),
                None => error!("{}", e),
            }
        }
        AppError::from(e)
    })?;

    Ok((StatusCode::OK, Json(places)).into_response())
}
