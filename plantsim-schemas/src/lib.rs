pub mod command;
pub mod environment;
pub mod file_formats;
pub mod plant_state;

pub use command::Command;
pub use environment::{Environment, EnvironmentKey};
pub use plant_state::{PlantState, PlantStatus};
