use std::fmt;

/// Symbolic status tag derived from a provider condition code, used for icon selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTag {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Cloud,
}

impl StatusTag {
    /// Map an OpenWeather condition code to a status tag.
    ///
    /// Ranges are inclusive and checked in order. Anything unmapped falls back to
    /// [`StatusTag::Cloud`].
    ///
    /// Note: 801..=804 are "clouds" in the provider's own scheme but have always been
    /// shown with the thunderstorm icon here. Kept as-is until the intended mapping is
    /// confirmed.
    pub fn from_code(code: i64) -> Self {
        match code {
            200..=232 => StatusTag::Thunderstorm,
            300..=321 => StatusTag::Drizzle,
            500..=531 => StatusTag::Rain,
            600..=622 => StatusTag::Snow,
            701..=781 => StatusTag::Atmosphere,
            800 => StatusTag::Clear,
            801..=804 => StatusTag::Thunderstorm,
            _ => StatusTag::Cloud,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTag::Thunderstorm => "thunderstorm",
            StatusTag::Drizzle => "drizzle",
            StatusTag::Rain => "rain",
            StatusTag::Snow => "snow",
            StatusTag::Atmosphere => "fog/atmosphere",
            StatusTag::Clear => "clear",
            StatusTag::Cloud => "cloud",
        }
    }

    /// Symbol-icon name rendered next to the temperature.
    pub fn icon_name(&self) -> &'static str {
        match self {
            StatusTag::Thunderstorm => "cloud.bolt",
            StatusTag::Drizzle => "cloud.drizzle",
            StatusTag::Rain => "cloud.rain",
            StatusTag::Snow => "cloud.snow",
            StatusTag::Atmosphere => "cloud.fog",
            StatusTag::Clear => "sun.max",
            StatusTag::Cloud => "cloud",
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total mapping from condition code to status tag string.
pub fn map_condition_code(code: i64) -> &'static str {
    StatusTag::from_code(code).as_str()
}
