use validator::Validate;

use super::search_error::{Coordinate, SearchError};
use crate::types::{
    lat_long_location::LatLongLocation, place_type::PlaceType, price_level::PriceLevel,
};

/// Query string of `GET /api/nearby`, exactly as the browser sent it.
#[derive(Debug, Default)]
pub struct RawQueryParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub minprice: Option<String>,
    pub maxprice: Option<String>,
    pub place_type: Option<String>,
    pub open_now: Option<String>,
}

/// A repeated key keeps its first value, unknown keys are ignored.
impl FromIterator<(String, String)> for RawQueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = RawQueryParams::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat" => &mut params.lat,
                "lng" => &mut params.lng,
                "radius" => &mut params.radius,
                "minprice" => &mut params.minprice,
                "maxprice" => &mut params.maxprice,
                "type" => &mut params.place_type,
                "open_now" => &mut params.open_now,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        params
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub location: LatLongLocation,
    /// `None` leaves the radius up to the provider.
    pub radius_meters: Option<u32>,
    pub min_price: Option<PriceLevel>,
    pub max_price: Option<PriceLevel>,
    pub place_type: Option<PlaceType>,
    pub open_now: bool,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_coordinate(value: Option<&str>, coordinate: Coordinate) -> Result<f64, SearchError> {
    value
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or(SearchError::MissingCoordinate(coordinate))
}

fn parse_price_level(value: Option<String>) -> Result<Option<PriceLevel>, SearchError> {
    present(value)
        .map(|v| v.parse::<PriceLevel>())
        .transpose()
        .map_err(SearchError::from)
}

impl TryFrom<RawQueryParams> for SearchQuery {
    type Error = SearchError;

    fn try_from(params: RawQueryParams) -> Result<Self, Self::Error> {
        let location = LatLongLocation {
            latitude: parse_coordinate(params.lat.as_deref(), Coordinate::Latitude)?,
            longitude: parse_coordinate(params.lng.as_deref(), Coordinate::Longitude)?,
        };
        location
            .validate()
            .map_err(SearchError::CoordinateOutOfRange)?;

        let min_price = parse_price_level(params.minprice)?;
        let max_price = parse_price_level(params.maxprice)?;

        // An unparseable radius is dropped rather than rejected, and so is zero.
        let radius_meters = present(params.radius)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|r| *r > 0);

        let place_type = present(params.place_type)
            .map(|v| v.parse::<PlaceType>())
            .transpose()?;

        Ok(SearchQuery {
            location,
            radius_meters,
            min_price,
            max_price,
            place_type,
            open_now: params.open_now.as_deref() == Some("true"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(lat: &str, lng: &str) -> RawQueryParams {
        RawQueryParams {
            lat: Some(lat.to_string()),
            lng: Some(lng.to_string()),
            ..Default::default()
        }
    }

    fn pairs(query: &[(&str, &str)]) -> RawQueryParams {
        query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn collects_known_keys() {
        let raw = pairs(&[
            ("lat", "1"),
            ("lng", "2"),
            ("type", "cafe"),
            ("open_now", "true"),
            ("utm_source", "newsletter"),
        ]);

        assert_eq!(raw.lat.as_deref(), Some("1"));
        assert_eq!(raw.lng.as_deref(), Some("2"));
        assert_eq!(raw.place_type.as_deref(), Some("cafe"));
        assert_eq!(raw.open_now.as_deref(), Some("true"));
        assert_eq!(raw.radius, None);
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let raw = pairs(&[
            ("lat", "1"),
            ("lng", "1"),
            ("type", "restaurant"),
            ("type", "bar"),
            ("minprice", "1"),
            ("minprice", "9"),
        ]);

        let query = SearchQuery::try_from(raw).unwrap();

        assert_eq!(query.place_type.map(|t| t.as_str()), Some("restaurant"));
        assert_eq!(query.min_price, Some(PriceLevel::Inexpensive));
    }

    #[test]
    fn coordinates_only() {
        let query = SearchQuery::try_from(params("40.7128", "-74.006")).unwrap();

        assert_eq!(
            query,
            SearchQuery {
                location: LatLongLocation {
                    latitude: 40.7128,
                    longitude: -74.006,
                },
                radius_meters: None,
                min_price: None,
                max_price: None,
                place_type: None,
                open_now: false,
            }
        );
    }

    #[test]
    fn missing_or_garbage_latitude() {
        let missing = RawQueryParams {
            lng: Some("1".to_string()),
            ..Default::default()
        };

        for raw in [missing, params("abc", "1"), params("", "1"), params("NaN", "1"), params("inf", "1")] {
            assert!(matches!(
                SearchQuery::try_from(raw),
                Err(SearchError::MissingCoordinate(Coordinate::Latitude))
            ));
        }
    }

    #[test]
    fn latitude_is_checked_before_longitude() {
        let err = SearchQuery::try_from(RawQueryParams::default()).unwrap_err();
        assert!(matches!(err, SearchError::MissingCoordinate(Coordinate::Latitude)));

        let err = SearchQuery::try_from(params("10", "east")).unwrap_err();
        assert!(matches!(err, SearchError::MissingCoordinate(Coordinate::Longitude)));
    }

    #[test]
    fn out_of_range_coordinates() {
        let err = SearchQuery::try_from(params("0", "180.5")).unwrap_err();

        assert!(matches!(err, SearchError::CoordinateOutOfRange(_)));
    }

    #[test]
    fn coordinate_errors_win_over_price_errors() {
        let raw = RawQueryParams {
            minprice: Some("5".to_string()),
            ..params("abc", "1")
        };

        assert!(matches!(
            SearchQuery::try_from(raw),
            Err(SearchError::MissingCoordinate(_))
        ));
    }

    #[test]
    fn price_levels_map_independently() {
        let raw = RawQueryParams {
            minprice: Some("2".to_string()),
            maxprice: Some("4".to_string()),
            ..params("1", "1")
        };

        let query = SearchQuery::try_from(raw).unwrap();

        assert_eq!(query.min_price, Some(PriceLevel::Moderate));
        assert_eq!(query.max_price, Some(PriceLevel::VeryExpensive));
    }

    #[test]
    fn invalid_price_levels() {
        let raw = RawQueryParams {
            minprice: Some("5".to_string()),
            ..params("1", "1")
        };
        let err = SearchQuery::try_from(raw).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPriceLevel(_)));
        assert_eq!(err.to_string(), "Unknown price level: '5'");

        let raw = RawQueryParams {
            minprice: Some("1".to_string()),
            maxprice: Some("cheap".to_string()),
            ..params("1", "1")
        };
        assert_eq!(
            SearchQuery::try_from(raw).unwrap_err().to_string(),
            "Unknown price level: 'cheap'"
        );
    }

    #[test]
    fn empty_optional_values_are_absent() {
        let raw = RawQueryParams {
            minprice: Some("".to_string()),
            maxprice: Some("".to_string()),
            place_type: Some("".to_string()),
            radius: Some("".to_string()),
            ..params("1", "1")
        };

        let query = SearchQuery::try_from(raw).unwrap();

        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, None);
        assert_eq!(query.place_type, None);
        assert_eq!(query.radius_meters, None);
    }

    #[test]
    fn radius_is_lenient() {
        for (radius, expected) in [
            ("1500", Some(1500)),
            ("notanumber", None),
            ("-5", None),
            ("0", None),
            ("99999999999", None),
        ] {
            let raw = RawQueryParams {
                radius: Some(radius.to_string()),
                ..params("1", "1")
            };

            assert_eq!(
                SearchQuery::try_from(raw).unwrap().radius_meters,
                expected,
                "radius={}",
                radius
            );
        }
    }

    #[test]
    fn place_type_vocabulary() {
        let raw = RawQueryParams {
            place_type: Some("restaurant".to_string()),
            ..params("1", "1")
        };
        assert_eq!(
            SearchQuery::try_from(raw).unwrap().place_type.map(|t| t.as_str()),
            Some("restaurant")
        );

        let raw = RawQueryParams {
            place_type: Some("bogus_type".to_string()),
            ..params("1", "1")
        };
        let err = SearchQuery::try_from(raw).unwrap_err();
        assert!(matches!(err, SearchError::UnknownPlaceType(_)));
        assert_eq!(err.to_string(), "Unknown place type \"bogus_type\"");
    }

    #[test]
    fn price_errors_win_over_type_errors() {
        let raw = RawQueryParams {
            maxprice: Some("8".to_string()),
            place_type: Some("bogus_type".to_string()),
            ..params("1", "1")
        };

        assert!(matches!(
            SearchQuery::try_from(raw),
            Err(SearchError::InvalidPriceLevel(_))
        ));
    }

    #[test]
    fn open_now_only_for_true() {
        for (value, expected) in [("true", true), ("false", false), ("1", false), ("TRUE", false)] {
            let raw = RawQueryParams {
                open_now: Some(value.to_string()),
                ..params("1", "1")
            };

            assert_eq!(SearchQuery::try_from(raw).unwrap().open_now, expected);
        }
    }
}
