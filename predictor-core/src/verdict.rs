use serde::Serialize;

use crate::model::WeatherReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    Sunny,
    Rainy,
    Cloudy,
    Snowy,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Sunny => "Sunny",
            Verdict::Rainy => "Rainy",
            Verdict::Cloudy => "Cloudy",
            Verdict::Snowy => "Snowy",
            Verdict::PartlyCloudy => "Partly Cloudy",
            Verdict::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Checked in order; the first substring found wins.
const RULES: [(&str, Verdict); 4] = [
    ("rain", Verdict::Rainy),
    ("clear", Verdict::Sunny),
    ("cloud", Verdict::Cloudy),
    ("snow", Verdict::Snowy),
];

/// Map the reading's condition group to a verdict.
pub fn classify(reading: &WeatherReading) -> Verdict {
    classify_condition(reading.condition.as_deref())
}

/// Case-insensitive substring match over the fixed rule list.
///
/// A missing or blank condition yields [`Verdict::Unknown`]; anything present
/// that matches no rule is [`Verdict::PartlyCloudy`].
pub fn classify_condition(condition: Option<&str>) -> Verdict {
    let Some(code) = condition.map(str::trim).filter(|c| !c.is_empty()) else {
        return Verdict::Unknown;
    };

    let code = code.to_lowercase();
    RULES
        .iter()
        .find(|(needle, _)| code.contains(needle))
        .map_or(Verdict::PartlyCloudy, |(_, verdict)| *verdict)
}
