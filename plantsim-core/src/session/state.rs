use plantsim_schemas::{Environment, PlantState, PlantStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    StatusChanged { from: PlantStatus, to: PlantStatus },
    Reset,
}

/// What the presentation layer sees after each step.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub step: u64,
    pub environment: Environment,
    pub plant: PlantState,
    pub events: Vec<SessionEvent>,
}
