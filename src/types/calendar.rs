//! Fixed calendar lookup tables and display orderings.
//!
//! Day-of-week numbering is 1=Monday..7=Sunday, matching both the dataset
//! convention and the weekday extraction of the frame engine. Presentation
//! orderings (Monday→Sunday, January→December) are pinned here so every
//! report hands the renderer the same category order.

/// `(number, name)` pairs for days of the week, 1=Monday.
pub const DAY_NAMES: [(i64, &str); 7] = [
    (1, "Monday"),
    (2, "Tuesday"),
    (3, "Wednesday"),
    (4, "Thursday"),
    (5, "Friday"),
    (6, "Saturday"),
    (7, "Sunday"),
];

/// `(number, name)` pairs for months, 1=January.
pub const MONTH_NAMES: [(i64, &str); 12] = [
    (1, "January"),
    (2, "February"),
    (3, "March"),
    (4, "April"),
    (5, "May"),
    (6, "June"),
    (7, "July"),
    (8, "August"),
    (9, "September"),
    (10, "October"),
    (11, "November"),
    (12, "December"),
];

/// The six hours treated as peak commuting windows.
pub const COMMUTE_HOURS: [i32; 6] = [7, 8, 9, 17, 18, 19];

/// Day names in display order, Monday first.
pub fn day_order() -> Vec<String> {
    DAY_NAMES.iter().map(|(_, name)| name.to_string()).collect()
}

/// Month names in display order, January first.
pub fn month_order() -> Vec<String> {
    MONTH_NAMES
        .iter()
        .map(|(_, name)| name.to_string())
        .collect()
}
