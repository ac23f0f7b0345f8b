use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct LatLongLocation {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

impl LatLongLocation {
    /// Formats the point the way the places API expects a `location` parameter.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}
