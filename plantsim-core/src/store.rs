use crate::classifier::classify;
use plantsim_schemas::{Command, Environment, EnvironmentKey, PlantState};

/// Holds the current environment and the plant state derived from it.
///
/// Every mutation replaces the environment snapshot and reclassifies in the
/// same call, so `plant_state()` always matches `environment()`.
#[derive(Debug, Clone)]
pub struct EnvironmentStore {
    environment: Environment,
    plant: PlantState,
}

impl EnvironmentStore {
    /// A store at [`Environment::INITIAL`].
    pub fn new() -> Self {
        Self::starting_at(Environment::INITIAL)
    }

    /// A store starting from an arbitrary snapshot. `reset` still returns to
    /// [`Environment::INITIAL`].
    pub fn starting_at(environment: Environment) -> Self {
        Self {
            environment,
            plant: classify(environment),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn plant_state(&self) -> PlantState {
        self.plant
    }

    /// Replaces one parameter and reclassifies.
    pub fn set(&mut self, key: EnvironmentKey, value: f64) -> PlantState {
        tracing::debug!(%key, value, "environment update");
        self.replace(self.environment.with(key, value))
    }

    /// Restores the initial snapshot and reclassifies.
    pub fn reset(&mut self) -> PlantState {
        tracing::debug!("environment reset");
        self.replace(Environment::INITIAL)
    }

    pub fn apply(&mut self, command: Command) -> PlantState {
        match command {
            Command::Set { key, value } => self.set(key, value),
            Command::Reset => self.reset(),
        }
    }

    fn replace(&mut self, environment: Environment) -> PlantState {
        self.environment = environment;
        self.plant = classify(environment);
        self.plant
    }
}

impl Default for EnvironmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantsim_schemas::PlantStatus;

    #[test]
    fn test_new_store_is_classified() {
        let store = EnvironmentStore::new();
        assert_eq!(store.environment(), Environment::INITIAL);
        assert_eq!(store.plant_state(), classify(Environment::INITIAL));
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let mut store = EnvironmentStore::new();
        let state = store.set(EnvironmentKey::Temperature, -4.0);
        assert_eq!(state.status, PlantStatus::Frozen);
        assert_eq!(store.environment(), Environment::new(-4.0, 10.0, 80.0));
        assert_eq!(store.plant_state(), state);
    }

    #[test]
    fn test_reset_matches_fresh_start() {
        let fresh = EnvironmentStore::new().plant_state();
        let mut store = EnvironmentStore::starting_at(Environment::new(48.0, 95.0, 3.0));
        assert_eq!(store.plant_state().status, PlantStatus::Wilted);

        store.set(EnvironmentKey::Water, 50.0);
        let state = store.reset();
        assert_eq!(state, fresh);
        assert_eq!(store.environment(), Environment::INITIAL);
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut store = EnvironmentStore::new();
        let state = store.apply(Command::Set {
            key: EnvironmentKey::Wind,
            value: 90.0,
        });
        assert_eq!(state.status, PlantStatus::Broken);
        assert_eq!(store.apply(Command::Reset).status, PlantStatus::Fruiting);
    }
}
