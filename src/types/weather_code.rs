//! Defines the `WeatherCode` enum, mapping the dataset's numeric weather codes
//! to descriptive labels.

/// Represents the weather category code of an observation.
///
/// The dataset encodes weather as a small integer; only the eight codes below
/// ever appear in the London data. An integer can be converted into this enum
/// with [`WeatherCode::from_i64`], which returns `None` for any other value —
/// an unmapped code yields a null description downstream rather than an error.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCode {
    /// Code 1: clear, possibly with haze or patches of fog.
    Clear = 1,
    /// Code 2: scattered or few clouds.
    FewClouds = 2,
    /// Code 3: broken clouds.
    BrokenClouds = 3,
    /// Code 4: cloudy.
    Cloudy = 4,
    /// Code 7: rain or light rain shower.
    LightRain = 7,
    /// Code 10: rain with thunderstorm.
    Thunderstorm = 10,
    /// Code 26: snowfall.
    Snowfall = 26,
    /// Code 94: freezing fog.
    FreezingFog = 94,
}

impl WeatherCode {
    pub const ALL: [WeatherCode; 8] = [
        WeatherCode::Clear,
        WeatherCode::FewClouds,
        WeatherCode::BrokenClouds,
        WeatherCode::Cloudy,
        WeatherCode::LightRain,
        WeatherCode::Thunderstorm,
        WeatherCode::Snowfall,
        WeatherCode::FreezingFog,
    ];

    /// Descriptions of the conditions flagged as severe weather.
    pub const SEVERE_DESCRIPTIONS: [&'static str; 3] =
        ["snowfall", "Freezing Fog", "rain with thunderstorm"];

    /// Attempts to convert a raw weather code into a `WeatherCode` variant.
    ///
    /// Returns `None` for codes outside the fixed eight-entry table.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(WeatherCode::Clear),
            2 => Some(WeatherCode::FewClouds),
            3 => Some(WeatherCode::BrokenClouds),
            4 => Some(WeatherCode::Cloudy),
            7 => Some(WeatherCode::LightRain),
            10 => Some(WeatherCode::Thunderstorm),
            26 => Some(WeatherCode::Snowfall),
            94 => Some(WeatherCode::FreezingFog),
            _ => None,
        }
    }

    /// The human-readable description, verbatim from the dataset dictionary.
    pub fn description(&self) -> &'static str {
        match self {
            WeatherCode::Clear => "Clear",
            WeatherCode::FewClouds => "Few Clouds",
            WeatherCode::BrokenClouds => "Broken Clouds",
            WeatherCode::Cloudy => "Cloudy",
            WeatherCode::LightRain => "Light rain",
            WeatherCode::Thunderstorm => "rain with thunderstorm",
            WeatherCode::Snowfall => "snowfall",
            WeatherCode::FreezingFog => "Freezing Fog",
        }
    }

    /// Whether this condition counts as severe weather.
    pub fn is_severe(&self) -> bool {
        matches!(
            self,
            WeatherCode::Snowfall | WeatherCode::FreezingFog | WeatherCode::Thunderstorm
        )
    }

    /// `(code, description)` pairs for building lookup expressions.
    pub fn description_pairs() -> [(i64, &'static str); 8] {
        [
            (1, "Clear"),
            (2, "Few Clouds"),
            (3, "Broken Clouds"),
            (4, "Cloudy"),
            (7, "Light rain"),
            (10, "rain with thunderstorm"),
            (26, "snowfall"),
            (94, "Freezing Fog"),
        ]
    }
}
