use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three adjustable environmental parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentKey {
    Temperature,
    Wind,
    Water,
}

impl EnvironmentKey {
    pub const ALL: [EnvironmentKey; 3] = [Self::Temperature, Self::Wind, Self::Water];

    /// Parses a key name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "temperature" => Some(Self::Temperature),
            "wind" => Some(Self::Wind),
            "water" => Some(Self::Water),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Wind => "wind",
            Self::Water => "water",
        }
    }

    /// Unit symbol of the model value (°C, km/h, %).
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Wind => "km/h",
            Self::Water => "%",
        }
    }
}

impl fmt::Display for EnvironmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the simulated conditions.
///
/// Values are unconstrained here; range limits belong to whatever produces
/// the input. A snapshot is never edited in place: [`Environment::with`]
/// returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Degrees Celsius.
    pub temperature: f64,
    /// km/h.
    pub wind: f64,
    /// Percentage.
    pub water: f64,
}

impl Environment {
    /// The snapshot a fresh or reset store starts from.
    pub const INITIAL: Environment = Environment {
        temperature: 22.0,
        wind: 10.0,
        water: 80.0,
    };

    pub fn new(temperature: f64, wind: f64, water: f64) -> Self {
        Self {
            temperature,
            wind,
            water,
        }
    }

    pub fn get(&self, key: EnvironmentKey) -> f64 {
        match key {
            EnvironmentKey::Temperature => self.temperature,
            EnvironmentKey::Wind => self.wind,
            EnvironmentKey::Water => self.water,
        }
    }

    /// Returns a copy with exactly one field replaced.
    #[must_use]
    pub fn with(self, key: EnvironmentKey, value: f64) -> Self {
        let mut next = self;
        match key {
            EnvironmentKey::Temperature => next.temperature = value,
            EnvironmentKey::Wind => next.wind = value,
            EnvironmentKey::Water => next.water = value,
        }
        next
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::INITIAL
    }
}
