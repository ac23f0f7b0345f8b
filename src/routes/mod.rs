use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_hello;
mod get_nearby_places;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/api/hello", get(get_hello::get_hello))
        .route("/api/nearby", get(get_nearby_places::get_nearby_places))
}
