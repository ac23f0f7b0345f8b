pub mod nearby_search_proxy;
pub mod search_error;
pub mod search_query;
