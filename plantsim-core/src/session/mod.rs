pub mod builder;
pub mod engine;
pub mod script;
pub mod state;

pub use builder::SessionBuilder;
pub use engine::Session;
pub use state::{SessionEvent, SessionState};
