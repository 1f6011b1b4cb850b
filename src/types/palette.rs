//! Shared color maps for weather conditions and seasons.
//!
//! Defined once and referenced by every report that colors by these
//! categories; reports never carry their own copies.

/// Discrete colors per weather description.
pub const WEATHER_COLORS: [(&str, &str); 8] = [
    ("Clear", "rgb(58, 200, 225)"),
    ("Few Clouds", "rgb(174, 214, 241)"),
    ("Broken Clouds", "rgb(211, 84, 0)"),
    ("Cloudy", "rgb(133, 146, 158)"),
    ("Light rain", "rgb(41, 128, 185)"),
    ("rain with thunderstorm", "rgb(192, 57, 43)"),
    ("snowfall", "rgb(55, 80, 100)"),
    ("Freezing Fog", "rgb(52, 73, 94)"),
];

/// Discrete colors per season, with Autumn kept semi-transparent.
pub const SEASON_COLORS: [(&str, &str); 4] = [
    ("spring", "rgb(237, 74, 74)"),
    ("summer", "rgb(100, 184, 88)"),
    ("Autumn", "rgba(255,165,0,0.3)"),
    ("winter", "rgb(109, 158, 222)"),
];

pub fn weather_color_map() -> Vec<(String, String)> {
    WEATHER_COLORS
        .iter()
        .map(|(category, color)| (category.to_string(), color.to_string()))
        .collect()
}

pub fn season_color_map() -> Vec<(String, String)> {
    SEASON_COLORS
        .iter()
        .map(|(category, color)| (category.to_string(), color.to_string()))
        .collect()
}
