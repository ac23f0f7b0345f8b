use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsServiceError {
    #[error("Client error: {0}")]
    Client(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to decode response body: {0}")]
    Decode(String),

    #[error(
        "Places API returned status {status}: {}",
        .message.as_deref().unwrap_or("no error message")
    )]
    Status {
        status: String,
        message: Option<String>,
    },
}

impl From<reqwest::Error> for MapsServiceError {
    fn from(e: reqwest::Error) -> Self {
        // the request URL carries the API key
        let e = e.without_url();

        if e.is_builder() {
            MapsServiceError::Client(e.to_string())
        } else if e.is_decode() {
            MapsServiceError::Decode(e.to_string())
        } else {
            MapsServiceError::Request(e.to_string())
        }
    }
}
