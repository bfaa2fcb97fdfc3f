use crate::{
    error::PlantSimError,
    logger::TranscriptLogger,
    session::{engine::Session, state::SessionState},
    store::EnvironmentStore,
};
use plantsim_schemas::Environment;

/// A fluent builder for constructing a `Session`.
#[derive(Default)]
pub struct SessionBuilder {
    initial_environment: Option<Environment>,
    transcript_path: Option<String>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the session somewhere other than the initial snapshot.
    /// A `reset` command still goes back to [`Environment::INITIAL`].
    pub fn with_initial_environment(mut self, environment: Environment) -> Self {
        self.initial_environment = Some(environment);
        self
    }

    /// Configures the session to write a CSV transcript of every step.
    pub fn with_transcript_to_file(mut self, path: &str) -> Self {
        self.transcript_path = Some(path.to_string());
        self
    }

    /// # Errors
    ///
    /// Returns a `PlantSimError` if the transcript file cannot be created or
    /// its first row cannot be written.
    pub fn build(self) -> Result<Session, PlantSimError> {
        let store = match self.initial_environment {
            Some(environment) => EnvironmentStore::starting_at(environment),
            None => EnvironmentStore::new(),
        };

        let mut logger = match self.transcript_path {
            Some(path) => Some(
                TranscriptLogger::new(&path).map_err(|e| PlantSimError::CsvError(path.clone(), e))?,
            ),
            None => None,
        };

        let state = SessionState {
            step: 0,
            environment: store.environment(),
            plant: store.plant_state(),
            events: Vec::new(),
        };

        if let Some(logger) = &mut logger {
            logger.log_state(&state, "INITIAL")?;
        }

        Ok(Session {
            store,
            state,
            logger,
        })
    }
}
