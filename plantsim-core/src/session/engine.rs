use super::state::{SessionEvent, SessionState};
use crate::{error::PlantSimError, logger::TranscriptLogger, store::EnvironmentStore};
use plantsim_schemas::{Command, PlantState};

/// Drives an [`EnvironmentStore`] from a stream of commands, one step per
/// command.
pub struct Session {
    pub(super) store: EnvironmentStore,
    pub(super) state: SessionState,
    pub(super) logger: Option<TranscriptLogger>,
}

impl Session {
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &EnvironmentStore {
        &self.store
    }

    /// Applies one command. The step is written to the transcript before it
    /// is committed, so a failed write leaves the session unchanged.
    pub fn apply(&mut self, command: Command) -> Result<PlantState, PlantSimError> {
        let previous = self.store.plant_state().status;
        let mut store = self.store.clone();
        let plant = store.apply(command);

        let mut events = Vec::new();
        if command == Command::Reset {
            events.push(SessionEvent::Reset);
        }
        if plant.status != previous {
            events.push(SessionEvent::StatusChanged {
                from: previous,
                to: plant.status,
            });
        }
        let next = SessionState {
            step: self.state.step + 1,
            environment: store.environment(),
            plant,
            events,
        };

        if let Some(logger) = &mut self.logger {
            logger.log_state(&next, &command.to_string())?;
        }

        if plant.status != previous {
            tracing::info!(from = %previous, to = %plant.status, step = next.step, "plant status changed");
        }
        self.store = store;
        self.state = next;
        Ok(plant)
    }

    /// Applies each command in order and returns the final plant state.
    pub fn replay(&mut self, commands: &[Command]) -> Result<PlantState, PlantSimError> {
        for command in commands {
            self.apply(*command)?;
        }
        tracing::info!(steps = commands.len(), "replay complete");
        Ok(self.state.plant)
    }
}
