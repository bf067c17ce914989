use crate::{
    error::{CoordinateError, ServiceError},
    model::WeatherModel,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Device location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Validated constructor: latitude in -90..=90, longitude in -180..=180.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }

        Ok(Self { latitude, longitude })
    }
}

/// What a single fetch asks for. Coordinates and city name are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    Coordinates { latitude: f64, longitude: f64 },
    /// Free-text city name, passed through unvalidated.
    CityName(String),
}

impl WeatherQuery {
    /// Location-specific query parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            WeatherQuery::Coordinates { latitude, longitude } => vec![
                ("lat", format_degrees(*latitude)),
                ("lon", format_degrees(*longitude)),
            ],
            WeatherQuery::CityName(name) => vec![("q", name.clone())],
        }
    }
}

impl From<Coordinates> for WeatherQuery {
    fn from(c: Coordinates) -> Self {
        WeatherQuery::Coordinates { latitude: c.latitude, longitude: c.longitude }
    }
}

/// Anything that can resolve a [`WeatherQuery`] into a decoded model.
///
/// Every call resolves exactly once, with either the model or a classified error.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherModel, ServiceError>;
}

/// Decimal degrees, always with a fractional part (`41.0`, not `41`).
fn format_degrees(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') || !value.is_finite() { s } else { format!("{s}.0") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_keep_a_decimal_digit() {
        let pairs = WeatherQuery::Coordinates { latitude: 41.0, longitude: 29.0 }.query_pairs();
        assert_eq!(pairs, vec![("lat", "41.0".to_string()), ("lon", "29.0".to_string())]);
    }

    #[test]
    fn fractional_coordinates_are_not_padded() {
        let pairs = WeatherQuery::Coordinates { latitude: 38.4192, longitude: -0.0000001 }
            .query_pairs();
        assert_eq!(pairs[0].1, "38.4192");
        assert_eq!(pairs[1].1, "-0.0000001");
    }

    #[test]
    fn city_name_uses_q_only() {
        let pairs = WeatherQuery::CityName("Izmir".into()).query_pairs();
        assert_eq!(pairs, vec![("q", "Izmir".to_string())]);
    }

    #[test]
    fn coordinates_validate_ranges() {
        assert!(Coordinates::new(90.0, -180.0).is_ok());
        assert_eq!(Coordinates::new(90.5, 0.0), Err(CoordinateError::Latitude(90.5)));
        assert_eq!(Coordinates::new(0.0, 180.1), Err(CoordinateError::Longitude(180.1)));
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn coordinates_convert_into_query() {
        let c = Coordinates::new(41.0, 29.0).expect("in range");
        assert_eq!(
            WeatherQuery::from(c),
            WeatherQuery::Coordinates { latitude: 41.0, longitude: 29.0 }
        );
    }
}
