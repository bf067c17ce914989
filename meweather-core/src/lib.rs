//! Core library for the `meweather` client.
//!
//! This crate defines:
//! - Condition-code to status-tag mapping
//! - The decoded weather model and its display projection
//! - The OpenWeather fetch service and its error classification
//! - The presenter boundary holding the current on-screen state
//! - Configuration & credentials handling
//!
//! It is used by `meweather-cli`, but can also back other front ends.

pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod presenter;
pub mod service;
pub mod view_model;

pub use condition::{StatusTag, map_condition_code};
pub use config::Config;
pub use error::{CoordinateError, ServiceError, ViewModelError};
pub use model::{MainReading, WeatherCondition, WeatherModel};
pub use presenter::{Alert, PresentError, WeatherPresenter, WeatherState};
pub use service::{Coordinates, WeatherQuery, WeatherSource, openweather::WeatherService};
pub use view_model::WeatherViewModel;
