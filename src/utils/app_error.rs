use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};

use crate::services::nearby_search::search_error::SearchError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::new(e.status_code(), e.to_string().as_str())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (self.code, self.message).into_response()
    }
}
