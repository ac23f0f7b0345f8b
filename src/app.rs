use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{
    config::Config,
    routes::apply_routes,
    services::{
        maps_client::{
            maps_service::{MapsService, MapsServiceConfig},
            types::maps_service_error::MapsServiceError,
        },
        nearby_search::nearby_search_proxy::NearbySearchProxy,
    },
    types::app_state::AppState,
};

fn cors_middleware(config: &Config) -> CorsLayer {
    let allow_origin = if config.frontend_origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(config.frontend_origin.clone())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn gen_app(config: &Config) -> Result<Router, MapsServiceError> {
    let maps_service = MapsService::new(MapsServiceConfig {
        host: config.maps_host.clone(),
        timeout: config.provider_timeout,
    })?;

    let state = AppState {
        nearby_search: NearbySearchProxy::new(config.api_key.clone(), Arc::new(maps_service)),
    };

    // CorsLayer sets these on preflights only
    Ok(apply_routes(Router::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(cors_middleware(config))
        .with_state(state))
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app_with_key(api_key: Option<&str>) -> MockApp {
    use std::time::Duration;

    let google_server = mockito::Server::new_async().await;

    let config = Config {
        api_key: api_key.map(|k| k.to_string()),
        port: 0,
        frontend_origin: HeaderValue::from_static("http://localhost:3000"),
        maps_host: google_server.url(),
        provider_timeout: Duration::from_secs(5),
    };

    MockApp {
        app: gen_app(&config).unwrap(),
        google_server,
    }
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    gen_mock_app_with_key(Some("test-key")).await
}
