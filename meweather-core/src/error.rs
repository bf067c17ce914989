//! Error types shared across the fetch pipeline.

use thiserror::Error;

/// Classified failure of a single fetch.
///
/// The display text is the fixed, user-facing message. The underlying cause is
/// available through [`std::error::Error::source`] for logging only.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport failure: no response, connection error, unreadable body.
    #[error("Check your internet connection")]
    Server(#[source] reqwest::Error),

    /// A response arrived but its body does not match [`crate::WeatherModel`].
    #[error("Decoding Error")]
    Decoding(#[source] serde_json::Error),
}

impl ServiceError {
    pub fn is_server(&self) -> bool {
        matches!(self, ServiceError::Server(_))
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, ServiceError::Decoding(_))
    }
}

/// Transport errors are stored without their request URL, which carries the API key.
impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        ServiceError::Server(e.without_url())
    }
}

/// A decoded model that cannot be projected into display values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewModelError {
    #[error("Weather data contains no conditions")]
    EmptyConditions,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Latitude {0} is outside -90..=90")]
    Latitude(f64),

    #[error("Longitude {0} is outside -180..=180")]
    Longitude(f64),
}
