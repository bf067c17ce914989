use async_trait::async_trait;
use reqwest::{Client, Request};
use std::fmt;
use tracing::{debug, info, warn};

use crate::{error::ServiceError, model::WeatherModel};

use super::{WeatherQuery, WeatherSource};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeather current-weather client.
///
/// Holds only immutable configuration, so clones are cheap and can be shared freely
/// between call sites.
#[derive(Clone)]
pub struct WeatherService {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherService {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherModel, ServiceError> {
        self.fetch(&WeatherQuery::Coordinates { latitude, longitude }).await
    }

    pub async fn fetch_by_city_name(&self, name: &str) -> Result<WeatherModel, ServiceError> {
        self.fetch(&WeatherQuery::CityName(name.to_string())).await
    }

    /// Build the GET request for `query` without sending it.
    pub fn build_request(&self, query: &WeatherQuery) -> Result<Request, ServiceError> {
        let mut params = vec![
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ];
        params.extend(query.query_pairs());

        self.http
            .get(&self.base_url)
            .query(&params)
            .build()
            .map_err(ServiceError::from)
    }
}

#[async_trait]
impl WeatherSource for WeatherService {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherModel, ServiceError> {
        let request = self.build_request(query)?;

        let res = self.http.execute(request).await.map_err(|e| {
            let e = ServiceError::from(e);
            debug!(cause = ?std::error::Error::source(&e), "weather request failed");
            e
        })?;

        let status = res.status();
        if !status.is_success() {
            // The body is still decoded: provider error payloads surface as decoding errors.
            warn!(%status, "weather request returned non-success status");
        }

        let body = res.bytes().await.map_err(|e| {
            let e = ServiceError::from(e);
            debug!(cause = ?std::error::Error::source(&e), "failed to read weather response body");
            e
        })?;

        let model: WeatherModel = serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, body = %truncate_body(&body), "weather payload did not decode");
            ServiceError::Decoding(e)
        })?;

        info!(city = %model.name, temp = model.main.temp, "weather fetched");
        Ok(model)
    }
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 200;
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > MAX {
        format!("{}...", text.chars().take(MAX).collect::<String>())
    } else {
        text.into_owned()
    }
}
