use crate::{condition::StatusTag, error::ViewModelError, model::WeatherModel};

/// Display-ready projection of a [`WeatherModel`].
///
/// Only obtainable through `TryFrom`, which rejects models without conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherViewModel {
    id: i64,
    city_name: String,
    temperature: f64,
}

impl TryFrom<&WeatherModel> for WeatherViewModel {
    type Error = ViewModelError;

    fn try_from(model: &WeatherModel) -> Result<Self, Self::Error> {
        let condition = model.primary_condition().ok_or(ViewModelError::EmptyConditions)?;

        Ok(Self {
            id: condition.id,
            city_name: model.name.clone(),
            temperature: model.main.temp,
        })
    }
}

impl TryFrom<WeatherModel> for WeatherViewModel {
    type Error = ViewModelError;

    fn try_from(model: WeatherModel) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

impl WeatherViewModel {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Temperature rounded half away from zero, no decimal places.
    pub fn temperature_string(&self) -> String {
        format_temperature(self.temperature)
    }

    /// Temperature with its unit, e.g. `15°C`.
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_string())
    }

    pub fn status(&self) -> StatusTag {
        StatusTag::from_code(self.id)
    }

    pub fn status_tag(&self) -> &'static str {
        self.status().as_str()
    }

    pub fn icon_name(&self) -> &'static str {
        self.status().icon_name()
    }
}

fn format_temperature(temperature: f64) -> String {
    let rounded = temperature.round();
    // never render "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}
