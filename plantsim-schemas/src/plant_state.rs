use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition of the plant. Exactly one holds for any environment.
///
/// This is a locale-free tag; display strings are bound by the presentation
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantStatus {
    Healthy,
    Fruiting,
    Wilted,
    Frozen,
    Dried,
    Broken,
    Windy,
}

impl PlantStatus {
    pub const ALL: [PlantStatus; 7] = [
        Self::Frozen,
        Self::Wilted,
        Self::Dried,
        Self::Broken,
        Self::Fruiting,
        Self::Windy,
        Self::Healthy,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Fruiting => "fruiting",
            Self::Wilted => "wilted",
            Self::Frozen => "frozen",
            Self::Dried => "dried",
            Self::Broken => "broken",
            Self::Windy => "windy",
        }
    }
}

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Derived condition of the plant: a status plus a visual scale multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantState {
    pub status: PlantStatus,
    /// Multiplier around 1.0. Recomputed from the environment, never accumulated.
    pub growth: f64,
}
