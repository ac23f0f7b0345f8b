pub mod google_nearby_search_response;
pub mod maps_service_error;
