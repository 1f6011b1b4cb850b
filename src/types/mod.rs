pub mod calendar;
pub mod chart;
pub mod day_type;
pub mod observation;
pub mod palette;
pub mod report;
pub mod season;
pub mod weather_code;
