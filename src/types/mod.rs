pub mod app_state;
pub mod lat_long_location;
pub mod place_type;
pub mod price_level;
