pub mod maps_client;
pub mod nearby_search;
