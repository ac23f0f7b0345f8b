use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{
    search_error::SearchError,
    search_query::{RawQueryParams, SearchQuery},
};
use crate::services::maps_client::types::maps_service_error::MapsServiceError;

/// Anything that can answer a nearby search for a validated query.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn nearby_search(
        &self,
        api_key: &str,
        query: &SearchQuery,
    ) -> Result<Vec<Value>, MapsServiceError>;
}

#[derive(Clone)]
pub struct NearbySearchProxy {
    api_key: Option<Arc<str>>,
    provider: Arc<dyn PlacesProvider>,
}

impl NearbySearchProxy {
    pub fn new(api_key: Option<String>, provider: Arc<dyn PlacesProvider>) -> Self {
        Self {
            api_key: api_key.map(Arc::from),
            provider,
        }
    }

    /// Validates `params` and relays the provider's place records as-is.
    /// The first failing check decides the error.
    pub async fn search(&self, params: RawQueryParams) -> Result<Vec<Value>, SearchError> {
        let query = SearchQuery::try_from(params)?;

        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SearchError::MissingCredential)?;

        Ok(self.provider.nearby_search(api_key, &query).await?)
    }
}
