use crate::services::nearby_search::nearby_search_proxy::NearbySearchProxy;

#[derive(Clone)]
pub struct AppState {
    pub nearby_search: NearbySearchProxy,
}
