use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
};

use super::app_error::AppError;

/// Query string decoded into key/value pairs, in order, and collected into
/// `T`. A string that is not valid form encoding is a plain-text 400.
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: FromIterator<(String, String)>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::new(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid query: {}", e.body_text()).as_str(),
                )
            })?;

        Ok(QueryParams(pairs.into_iter().collect()))
    }
}
