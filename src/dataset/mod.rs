pub mod enrich;
pub mod enriched_frame;
pub mod error;
pub mod loader;
pub mod schema;

/// A ten-row raw fixture used across test modules: all four seasons, holiday
/// and weekend flags in every combination, all three severe weather
/// conditions, one unmapped weather code and two distinct years.
#[cfg(test)]
pub(crate) fn sample_raw_frame() -> polars::prelude::DataFrame {
    use schema::*;
    polars::df!(
        TIMESTAMP => [
            "2015-01-04 08:00:00", // Sunday, flags say working day
            "2015-01-01 10:00:00", // holiday
            "2015-01-10 14:00:00", // holiday and weekend: Holiday wins
            "2015-04-11 15:00:00", // Saturday, weekend
            "2015-04-15 17:00:00", // commute hour
            "2015-07-20 12:00:00",
            "2015-07-21 23:00:00", // unmapped weather code
            "2015-10-05 09:00:00", // snowfall, commute hour
            "2015-10-06 03:00:00", // thunderstorm
            "2016-12-25 23:00:00", // holiday weekend, freezing fog, second year
        ],
        RAW_COUNT => [182i64, 50, 75, 300, 420, 510, 90, 260, 15, 20],
        RAW_REAL_TEMPERATURE => [3.0, 2.0, 4.0, 12.0, 14.0, 24.0, 19.0, 11.0, 9.0, 1.0],
        RAW_FEELS_LIKE_TEMPERATURE => [2.0, 1.0, 3.0, 12.0, 14.0, 26.0, 19.0, 10.0, 7.0, -2.0],
        RAW_HUMIDITY => [93.0, 90.0, 85.0, 60.0, 55.0, 40.0, 65.0, 70.0, 80.0, 88.0],
        WIND_SPEED => [6.0, 10.0, 12.0, 15.0, 9.0, 8.0, 7.0, 20.0, 30.0, 25.0],
        WEATHER_CODE => [1i64, 3, 4, 2, 7, 2, 5, 26, 10, 94],
        IS_HOLIDAY => [0i64, 1, 1, 0, 0, 0, 0, 0, 0, 1],
        IS_WEEKEND => [0i64, 0, 1, 1, 0, 0, 0, 0, 0, 1],
        SEASON => [3i64, 3, 3, 0, 0, 1, 1, 2, 2, 3],
    )
    .expect("static fixture frame must build")
}
