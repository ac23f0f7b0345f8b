use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use urlencoding::encode;

use super::types::{
    google_nearby_search_response::GoogleNearbySearchResponse, maps_service_error::MapsServiceError,
};
use crate::services::nearby_search::{
    nearby_search_proxy::PlacesProvider, search_query::SearchQuery,
};

#[derive(Clone)]
pub struct MapsServiceConfig {
    pub host: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

pub struct NearbySearchOutput {
    pub results: Vec<Value>,
    pub next_page_token: Option<String>,
}

impl MapsService {
    pub fn new(config: MapsServiceConfig) -> Result<Self, MapsServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MapsServiceError::Client(format!("Failed to build client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn nearby_search_url(&self, api_key: &str, query: &SearchQuery) -> String {
        let mut params = vec![format!("location={}", query.location.to_query_value())];

        if let Some(radius) = query.radius_meters {
            params.push(format!("radius={}", radius));
        }
        if let Some(min_price) = query.min_price {
            params.push(format!("minprice={}", min_price.ordinal()));
        }
        if let Some(max_price) = query.max_price {
            params.push(format!("maxprice={}", max_price.ordinal()));
        }
        if let Some(place_type) = query.place_type {
            params.push(format!("type={}", encode(place_type.as_str())));
        }
        if query.open_now {
            params.push("opennow=true".to_string());
        }
        params.push(format!("key={}", encode(api_key)));

        format!(
            "{}/maps/api/place/nearbysearch/json?{}",
            self.config.host,
            params.join("&")
        )
    }

    pub async fn get_nearby_places(
        &self,
        api_key: &str,
        query: &SearchQuery,
    ) -> Result<NearbySearchOutput, MapsServiceError> {
        let url = self.nearby_search_url(api_key, query);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleNearbySearchResponse>()
            .await?;

        match body.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(NearbySearchOutput {
                results: body.results,
                next_page_token: body.next_page_token,
            }),
            _ => Err(MapsServiceError::Status {
                status: body.status,
                message: body.error_message,
            }),
        }
    }
}

#[async_trait]
impl PlacesProvider for MapsService {
    async fn nearby_search(
        &self,
        api_key: &str,
        query: &SearchQuery,
    ) -> Result<Vec<Value>, MapsServiceError> {
        let output = self.get_nearby_places(api_key, query).await?;

        if output.next_page_token.is_some() {
            debug!(
                "Returning first page of {} places, more are available",
                output.results.len()
            );
        }

        Ok(output.results)
    }
}
