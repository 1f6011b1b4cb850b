/// The meteorological season code of an observation.
///
/// The dataset encodes seasons as 0–3. Labels are kept verbatim from the
/// source data dictionary (note the capitalised "Autumn" and lowercase rest).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Season {
    Spring = 0,
    Summer = 1,
    Autumn = 2,
    Winter = 3,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(Season::Spring),
            1 => Some(Season::Summer),
            2 => Some(Season::Autumn),
            3 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "Autumn",
            Season::Winter => "winter",
        }
    }

    /// `(code, label)` pairs for building lookup expressions.
    pub fn label_pairs() -> [(i64, &'static str); 4] {
        [(0, "spring"), (1, "summer"), (2, "Autumn"), (3, "winter")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_labels() {
        for season in Season::ALL {
            let code = season as i64;
            assert_eq!(Season::from_i64(code), Some(season));
            let (pair_code, pair_label) = Season::label_pairs()[code as usize];
            assert_eq!(pair_code, code);
            assert_eq!(pair_label, season.label());
        }
        assert_eq!(Season::from_i64(4), None);
    }
}
