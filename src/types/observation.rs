use crate::types::day_type::DayType;
use crate::types::season::Season;
use crate::types::weather_code::WeatherCode;
use chrono::NaiveDateTime;

/// One enriched hourly observation, as a typed record.
///
/// The frame engine is the primary representation; this struct exists for
/// consumers that want row-wise, compile-time-checked access instead of
/// column names. Produced by
/// [`EnrichedFrame::observations`](crate::EnrichedFrame::observations).
#[derive(Debug, PartialEq, Clone)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub count_of_new_bike_shares: i64,
    pub real_temperature_c: f64,
    pub feels_like_temperature_c: f64,
    pub humidity_percentage: f64,
    pub wind_speed: f64,
    /// `None` for codes outside the fixed lookup table.
    pub weather_code: Option<WeatherCode>,
    pub is_holiday: bool,
    pub is_weekend: bool,
    pub season: Season,
    /// 1=Monday..7=Sunday.
    pub day_of_week: i32,
    pub month: i32,
    pub year: i32,
    pub hour: i32,
    pub day_type: DayType,
    pub comfort_index: f64,
    pub weather_severity: bool,
    pub commute_hours: bool,
}

impl Observation {
    /// The weather description, or `None` for an unmapped code.
    pub fn weather_description(&self) -> Option<&'static str> {
        self.weather_code.map(|code| code.description())
    }
}
