use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Release year as written in the dataset: usually a number, sometimes a
/// numeric string, occasionally something else entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseYear {
    Number(Number),
    Text(String),
    Other(Value),
}

impl ReleaseYear {
    /// Normalized numeric value; `None` when the year is not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ReleaseYear::Number(number) => number.as_f64(),
            ReleaseYear::Text(text) => parse_year(text),
            ReleaseYear::Other(_) => None,
        }
    }

    /// Numeric equality with a raw query value.
    pub fn matches(&self, query: &str) -> bool {
        match (self.as_f64(), parse_year(query)) {
            (Some(year), Some(wanted)) => year == wanted,
            _ => false,
        }
    }
}

impl From<i64> for ReleaseYear {
    fn from(year: i64) -> Self {
        ReleaseYear::Number(year.into())
    }
}

fn parse_year(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
