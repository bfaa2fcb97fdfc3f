//! Plant environment simulation: classify an environment snapshot into a
//! plant state, hold the current snapshot in a store, and drive the store
//! from user commands.

pub mod analysis;
pub mod classifier;
pub mod error;
pub mod logger;
pub mod presentation;
pub mod session;
pub mod store;

pub use classifier::classify;
pub use error::PlantSimError;
pub use store::EnvironmentStore;
