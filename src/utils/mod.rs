pub mod app_error;
pub mod query_params;
