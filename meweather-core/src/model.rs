use serde::{Deserialize, Serialize};

/// Current-weather payload as returned by the provider.
///
/// Only the fields the client renders are decoded; everything else in the
/// response is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherModel {
    /// City name.
    pub name: String,
    pub main: MainReading,
    /// Condition list, primary condition first.
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReading {
    /// Temperature in degrees Celsius (metric units are always requested).
    pub temp: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Provider-defined condition code.
    pub id: i64,
}

impl WeatherModel {
    pub fn primary_condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_provider_payload() {
        let body = r#"{
            "coord": {"lon": 27.14, "lat": 38.42},
            "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}],
            "main": {"temp": 15.4, "feels_like": 14.2, "humidity": 60},
            "name": "Izmir",
            "cod": 200
        }"#;

        let model: WeatherModel = serde_json::from_str(body).expect("payload should decode");
        assert_eq!(model.name, "Izmir");
        assert_eq!(model.main.temp, 15.4);
        assert_eq!(model.primary_condition(), Some(&WeatherCondition { id: 801 }));
    }

    #[test]
    fn missing_weather_field_fails() {
        let body = r#"{"name": "Izmir", "main": {"temp": 1.0}}"#;
        assert!(serde_json::from_str::<WeatherModel>(body).is_err());
    }

    #[test]
    fn wrong_field_type_fails() {
        let body = r#"{"name": "Izmir", "main": {"temp": "warm"}, "weather": [{"id": 800}]}"#;
        assert!(serde_json::from_str::<WeatherModel>(body).is_err());
    }

    #[test]
    fn empty_weather_decodes_without_primary_condition() {
        let body = r#"{"name": "Izmir", "main": {"temp": 1.0}, "weather": []}"#;
        let model: WeatherModel = serde_json::from_str(body).expect("payload should decode");
        assert!(model.primary_condition().is_none());
    }
}
