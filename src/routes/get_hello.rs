use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GetHelloResponse {
    pub message: String,
}

// lets the frontend check that the backend is reachable
pub async fn get_hello() -> Json<GetHelloResponse> {
    Json(GetHelloResponse {
        message: "Hello from the nearby search API!".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::app::gen_mock_app_with_key;

    #[tokio::test]
    async fn hello_without_api_key() {
        let mock_app = gen_mock_app_with_key(None).await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/api/hello").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetHelloResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.message, "Hello from the nearby search API!");
    }
}
