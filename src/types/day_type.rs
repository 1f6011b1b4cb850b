/// Classification of a calendar day, with holidays taking precedence over
/// weekends.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DayType {
    Holiday,
    Weekend,
    WorkingDay,
}

impl DayType {
    pub const ALL: [DayType; 3] = [DayType::Holiday, DayType::Weekend, DayType::WorkingDay];

    /// Classifies a day from its raw flags. Holiday wins over Weekend, which
    /// wins over Working Day.
    pub fn classify(is_holiday: bool, is_weekend: bool) -> Self {
        if is_holiday {
            DayType::Holiday
        } else if is_weekend {
            DayType::Weekend
        } else {
            DayType::WorkingDay
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayType::Holiday => "Holiday",
            DayType::Weekend => "Weekend",
            DayType::WorkingDay => "Working Day",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Holiday" => Some(DayType::Holiday),
            "Weekend" => Some(DayType::Weekend),
            "Working Day" => Some(DayType::WorkingDay),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holiday_takes_precedence_over_weekend() {
        assert_eq!(DayType::classify(true, true), DayType::Holiday);
        assert_eq!(DayType::classify(true, false), DayType::Holiday);
        assert_eq!(DayType::classify(false, true), DayType::Weekend);
        assert_eq!(DayType::classify(false, false), DayType::WorkingDay);
    }

    #[test]
    fn labels_round_trip() {
        for day_type in DayType::ALL {
            assert_eq!(DayType::from_label(day_type.label()), Some(day_type));
        }
        assert_eq!(DayType::from_label("weekend"), None);
    }
}
