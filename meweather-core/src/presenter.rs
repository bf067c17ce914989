//! Boundary between triggers (location updates, search commits) and what is on screen.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
    error::{ServiceError, ViewModelError},
    service::{Coordinates, WeatherQuery, WeatherSource},
    view_model::WeatherViewModel,
};

/// Why a trigger did not produce new on-screen state.
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("Location is not available")]
    NoLocation,

    #[error("Enter a city name")]
    EmptySearch,

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    ViewModel(#[from] ViewModelError),
}

impl PresentError {
    pub fn alert(&self) -> Alert {
        Alert { title: "Error", message: self.to_string() }
    }
}

/// Blocking acknowledgment shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

/// Holder of the single current view-model.
///
/// Updates are whole-value replacements; readers never observe a partial merge.
#[derive(Debug, Clone)]
pub struct WeatherState {
    tx: Arc<watch::Sender<Option<WeatherViewModel>>>,
}

impl Default for WeatherState {
    fn default() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }
}

impl WeatherState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current view-model, returning the previous one.
    pub fn replace(&self, view_model: WeatherViewModel) -> Option<WeatherViewModel> {
        self.tx.send_replace(Some(view_model))
    }

    pub fn current(&self) -> Option<WeatherViewModel> {
        self.tx.borrow().clone()
    }

    /// Receiver notified after every replace.
    pub fn subscribe(&self) -> watch::Receiver<Option<WeatherViewModel>> {
        self.tx.subscribe()
    }
}

/// Turns triggers into fetches and successful fetches into state replacements.
///
/// Overlapping triggers are not coordinated: whichever fetch completes last
/// determines the state.
#[derive(Debug)]
pub struct WeatherPresenter<S> {
    source: Arc<S>,
    state: WeatherState,
}

impl<S: WeatherSource> WeatherPresenter<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self::with_state(source, WeatherState::new())
    }

    pub fn with_state(source: Arc<S>, state: WeatherState) -> Self {
        Self { source, state }
    }

    pub fn state(&self) -> &WeatherState {
        &self.state
    }

    /// Device reported new locations; the most recent one is used.
    pub async fn on_location_update(
        &self,
        locations: &[Coordinates],
    ) -> Result<WeatherViewModel, PresentError> {
        let location = locations.last().ok_or(PresentError::NoLocation)?;
        self.present(WeatherQuery::from(*location)).await
    }

    /// User committed the search field.
    pub async fn on_search_submitted(&self, text: &str) -> Result<WeatherViewModel, PresentError> {
        let city = text.trim();
        if city.is_empty() {
            return Err(PresentError::EmptySearch);
        }

        self.present(WeatherQuery::CityName(city.to_string())).await
    }

    async fn present(&self, query: WeatherQuery) -> Result<WeatherViewModel, PresentError> {
        match self.fetch_view_model(&query).await {
            Ok(view_model) => {
                debug!(city = view_model.city_name(), "replacing displayed weather");
                self.state.replace(view_model.clone());
                Ok(view_model)
            }
            Err(e) => {
                warn!(?query, error = %e, cause = ?std::error::Error::source(&e), "weather update failed");
                Err(e)
            }
        }
    }

    async fn fetch_view_model(&self, query: &WeatherQuery) -> Result<WeatherViewModel, PresentError> {
        let model = self.source.fetch(query).await?;
        Ok(WeatherViewModel::try_from(&model)?)
    }
}
